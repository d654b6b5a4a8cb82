//! Diagnostic logging setup.
//!
//! Diagnostics are `tracing` events written to stderr. `RUST_LOG` takes
//! precedence; otherwise the level follows the `-q`/`-v` flags.

use tracing_subscriber::EnvFilter;

/// Picks the default filter directive for the given verbosity flags.
pub const fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "off",
        0 => "error",
        1 => "info,philo_chat=debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
