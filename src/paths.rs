//! XDG-style path utilities for configuration and data directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "philo";

/// Returns the configuration directory for philo.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/philo` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/philo` otherwise
pub fn config_dir() -> Result<PathBuf> {
    resolve("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the data directory for philo, where the session store lives.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/philo` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/philo` otherwise
pub fn data_dir() -> Result<PathBuf> {
    resolve("XDG_DATA_HOME", &[".local", "share"])
}

fn resolve(xdg_var: &str, home_relative: &[&str]) -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var(xdg_var)
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let mut dir = dirs::home_dir().context("Failed to determine home directory")?;
    for part in home_relative {
        dir.push(part);
    }
    Ok(dir.join(APP_DIR))
}
