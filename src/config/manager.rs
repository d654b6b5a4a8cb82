use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Environment variable that supplies the backend base URL.
pub const BACKEND_ENV: &str = "PHILO_BACKEND_URL";

/// Persona used when none is configured.
pub const DEFAULT_PERSONA: &str = "Dostoevsky";

/// Settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the chat service (the client posts to `<backend>/chat`).
    pub backend: Option<String>,
    /// Name the assistant is displayed as.
    pub persona: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/philo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The validated backend base URL.
    pub backend: String,
    /// The assistant's display name.
    pub persona: String,
}

/// Options for resolving configuration.
///
/// Contains CLI (or environment) overrides that take precedence over
/// config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Backend base URL override.
    pub backend: Option<String>,
    /// Persona override.
    pub persona: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if no backend URL is configured anywhere, or if the
/// configured value is not an http(s) URL.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let backend = options
        .backend
        .as_ref()
        .or(config_file.chat.backend.as_ref())
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'backend'\n\n\
                 Please provide it via:\n  \
                 - CLI option: philo --backend <url>\n  \
                 - Environment: {BACKEND_ENV}=<url>\n  \
                 - Config file: Run 'philo configure' to set up configuration"
            )
        })?;

    validate_backend(&backend)?;

    let persona = options
        .persona
        .as_ref()
        .or(config_file.chat.persona.as_ref())
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PERSONA.to_string());

    Ok(ResolvedConfig { backend, persona })
}

/// Checks that `backend` is an absolute http(s) base URL that `/chat` can
/// be appended to.
pub fn validate_backend(backend: &str) -> Result<()> {
    let url = Url::parse(backend).with_context(|| format!("Invalid backend URL: {backend}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid backend URL: {backend}\n\n\
             Only http and https URLs are supported"
        );
    }

    if url.query().is_some() || url.fragment().is_some() {
        bail!(
            "Invalid backend URL: {backend}\n\n\
             Use the base URL without a query string or fragment"
        );
    }

    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/philo/config.toml`
    /// or `~/.config/philo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
