//! Process-wide output switches set from the command line.
//!
//! Answers are written to stdout so `philo ask` can be piped. Status lines
//! and the typing indicator go to stderr and disappear with `--quiet`.
//! Diagnostics are `tracing` events and never pass through here.

use std::ffi::OsStr;
use std::sync::OnceLock;

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

/// How the terminal front end should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Hide status lines and the typing indicator.
    pub quiet: bool,
    /// Render styled text as plain text.
    pub no_color: bool,
}

impl OutputConfig {
    /// Combines the `--quiet`/`--no-color` flags with `NO_COLOR`.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: colors_disabled(no_color, std::env::var_os("NO_COLOR").as_deref()),
        }
    }
}

/// `NO_COLOR` only counts when set to a non-empty value (https://no-color.org/).
fn colors_disabled(flag: bool, no_color_env: Option<&OsStr>) -> bool {
    flag || no_color_env.is_some_and(|v| !v.is_empty())
}

/// Installs the switches; later calls keep the first value.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT.set(config);
}

/// The installed switches, or defaults derived from the environment.
pub fn config() -> OutputConfig {
    *OUTPUT.get_or_init(|| OutputConfig::from_flags(false, false))
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Prints a status line to stderr unless `--quiet` was given.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}
