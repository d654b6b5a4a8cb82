#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments (or `PHILO_BACKEND_URL`, merged by clap)
//! 2. Config file
//! 3. Built-in defaults (persona only; the backend has none)

use philo_chat::config::{
    ChatConfig, ConfigFile, DEFAULT_PERSONA, ResolveOptions, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        chat: ChatConfig {
            backend: Some("https://file.example.com".to_string()),
            persona: Some("Tolstoy".to_string()),
        },
    }
}

#[test]
fn test_cli_backend_overrides_config_backend() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        backend: Some("http://localhost:8000".to_string()),
        persona: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.backend, "http://localhost:8000");
    // Persona still comes from the file
    assert_eq!(resolved.persona, "Tolstoy");
}

#[test]
fn test_cli_persona_overrides_config_persona() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        backend: None,
        persona: Some("Chekhov".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.backend, "https://file.example.com");
    assert_eq!(resolved.persona, "Chekhov");
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.backend, "https://file.example.com");
    assert_eq!(resolved.persona, "Tolstoy");
}

#[test]
fn test_builtin_persona_when_nothing_configured() {
    let options = ResolveOptions {
        backend: Some("http://localhost:8000".to_string()),
        persona: None,
    };

    let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();

    assert_eq!(resolved.persona, DEFAULT_PERSONA);
}

#[test]
fn test_no_builtin_backend() {
    let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());
    assert!(result.is_err());
}

#[test]
fn test_invalid_cli_backend_is_not_masked_by_file() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        backend: Some("localhost:8000/no-scheme".to_string()),
        persona: None,
    };

    assert!(resolve_config(&options, &config).is_err());
}
