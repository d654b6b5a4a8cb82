use anyhow::Result;
use inquire::{InquireError, Text};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{ChatController, SubmitOutcome};
use super::ui::{self, SUGGESTED_QUESTIONS};
use crate::service::ChatService;
use crate::ui::{Spinner, Style, prompt_or_cancel};

const PLACEHOLDER: &str = "Ask about existence, suffering, freedom, or faith...";
const HELP_MESSAGE: &str = "Enter to send, /help for commands, Ctrl+C to quit";

/// Display settings for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name the assistant speaks as.
    pub persona: String,
    /// Full chat endpoint URL (for display).
    pub chat_url: String,
    /// Where the session id is stored (for display).
    pub store: String,
}

/// An interactive chat session.
///
/// Provides a REPL-style interface over a [`ChatController`].
pub struct ChatSession<S> {
    config: SessionConfig,
    controller: ChatController<S>,
}

impl<S: ChatService> ChatSession<S> {
    /// Creates a new chat session around an initialized controller.
    pub const fn new(config: SessionConfig, controller: ChatController<S>) -> Self {
        Self { config, controller }
    }

    pub async fn run(&mut self) -> Result<()> {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightMagenta)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        self.run_with(|initial_value| {
            Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder(PLACEHOLDER)
                .with_initial_value(initial_value)
                .with_help_message(HELP_MESSAGE)
                .prompt()
        })
        .await
    }

    /// Runs the REPL reading lines from `read_line`, which is handed the
    /// pending input to pre-fill.
    pub async fn run_with<F>(&mut self, mut read_line: F) -> Result<()>
    where
        F: FnMut(&str) -> Result<String, InquireError>,
    {
        ui::print_header(&self.config.persona);
        if self.controller.transcript().is_empty() {
            ui::print_welcome(&self.config.persona);
        }

        loop {
            let initial_value = self.controller.input().to_string();
            let Some(line) = prompt_or_cancel(read_line(&initial_value))? else {
                break;
            };
            if !self.handle_line(&line).await {
                break;
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Handles one line of input; returns `false` when the user asked to quit.
    async fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            Input::Empty => self.controller.set_input(String::new()),
            Input::Command(cmd) => {
                self.controller.set_input(String::new());
                return self.handle_command(cmd);
            }
            Input::Text(text) => {
                self.controller.set_input(text);
                self.submit_and_print().await;
            }
        }
        true
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => {
                ui::print_transcript(self.controller.transcript(), &self.config.persona);
            }
            SlashCommand::Session => ui::print_session(
                &self.config,
                self.controller.session_id().map(|id| id.as_str()),
            ),
            SlashCommand::Suggest(None) => ui::print_suggestions(),
            SlashCommand::Suggest(Some(n)) => self.pick_suggestion(n),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn pick_suggestion(&mut self, n: usize) {
        let Some(question) = n.checked_sub(1).and_then(|i| SUGGESTED_QUESTIONS.get(i)) else {
            ui::print_error(&format!(
                "No suggestion {n}. Pick 1-{}",
                SUGGESTED_QUESTIONS.len()
            ));
            return;
        };

        self.controller.set_input(*question);
        println!(
            "{} {}\n",
            Style::hint("Press Enter to ask:"),
            Style::value(question)
        );
    }

    async fn submit_and_print(&mut self) {
        let spinner = Spinner::new(&format!("{} is thinking...", self.config.persona));
        let outcome = self.controller.submit_input().await;
        spinner.stop();

        if outcome == SubmitOutcome::Ignored {
            return;
        }

        println!();
        if let Some(turn) = self.controller.transcript().last() {
            ui::print_turn(turn, &self.config.persona);
        }
    }
}
