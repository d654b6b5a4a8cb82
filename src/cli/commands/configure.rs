//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Text;
use inquire::validator::Validation;

use crate::config::{ChatConfig, ConfigFile, ConfigManager, DEFAULT_PERSONA, validate_backend};
use crate::status;
use crate::ui::{Style, prompt_or_cancel};

/// Runs the configure command.
///
/// With `show`, prints the current file settings; otherwise prompts for the
/// backend URL and persona and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_config(&manager, &config);
        return Ok(());
    }

    if prompt_or_cancel(run_configure_inner(&manager))?.is_none() {
        status!("{}", Style::hint("Configuration unchanged"));
    }
    Ok(())
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_config(manager, &config);

    let backend = prompt_backend(config.chat.backend.as_deref())?;
    let persona = prompt_persona(config.chat.persona.as_deref())?;

    config.chat = ChatConfig {
        backend: Some(backend),
        persona,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_config(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}  {}",
        Style::label("backend"),
        config
            .chat
            .backend
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("persona"),
        config
            .chat
            .persona
            .as_deref()
            .map_or_else(|| Style::secondary(format!("({DEFAULT_PERSONA})")), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!();
}

fn prompt_backend(default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new("Backend URL:")
        .with_help_message("Base URL of the chat service, e.g. https://example.com")
        .with_validator(|input: &str| -> Result<Validation, inquire::CustomUserError> {
            Ok(match validate_backend(input.trim()) {
                Ok(()) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        });

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    Ok(prompt.prompt()?.trim().to_string())
}

fn prompt_persona(default: Option<&str>) -> Result<Option<String>> {
    let persona = Text::new("Persona:")
        .with_help_message("Name the assistant is shown as")
        .with_default(default.unwrap_or(DEFAULT_PERSONA))
        .prompt()?;

    let persona = persona.trim();
    if persona.is_empty() || persona == DEFAULT_PERSONA {
        Ok(None)
    } else {
        Ok(Some(persona.to_string()))
    }
}
