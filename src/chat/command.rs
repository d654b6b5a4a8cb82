use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/quit", "Exit chat mode"),
    ("/session", "Show session id and backend"),
    ("/suggest", "List suggested questions, or pick one with /suggest <n>"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    History,
    Quit,
    Session,
    /// `None` lists suggestions, `Some(n)` picks the n-th (1-based).
    Suggest(Option<usize>),
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies a prompt line.
///
/// Text is returned untrimmed so the transcript keeps what was typed.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(line.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.as_slice() {
        ["help" | "h" | "?"] => Input::Command(SlashCommand::Help),
        ["history"] => Input::Command(SlashCommand::History),
        ["quit" | "exit" | "q"] => Input::Command(SlashCommand::Quit),
        ["session"] => Input::Command(SlashCommand::Session),
        ["suggest"] => Input::Command(SlashCommand::Suggest(None)),
        ["suggest", n] => n.parse().map_or_else(
            |_| Input::Command(SlashCommand::Unknown(parts.join(" "))),
            |n| Input::Command(SlashCommand::Suggest(Some(n))),
        ),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
