//! Chat mode UI components.

use crate::ui::Style;

use super::session::SessionConfig;
use super::transcript::{Role, Transcript, Turn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What does Ivan say about suffering?",
    "Explain the Grand Inquisitor's argument",
    "What is the role of faith and doubt?",
];

pub fn print_header(persona: &str) {
    println!(
        "{} {}",
        Style::title(format!("{persona} AI Philosopher")),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(format!(
            "Exploring existential questions through {persona}'s works"
        ))
    );
    println!();
}

pub fn print_welcome(persona: &str) {
    println!("{}", Style::header("Welcome to philosophical dialogue"));
    println!(
        "Ask about suffering, freedom, faith, or any theme from {persona}'s most famous works!"
    );
    println!();
    print_suggestions();
}

pub fn print_suggestions() {
    for (idx, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!(
            "  {} {}",
            Style::command(format!("/suggest {}", idx + 1)),
            Style::secondary(question)
        );
    }
    println!();
}

pub fn print_turn(turn: &Turn, persona: &str) {
    let speaker = match turn.role {
        Role::User => Style::user("You"),
        Role::Assistant => Style::assistant(persona),
    };
    println!("{speaker}");
    println!("{}", turn.content);
    println!();
}

pub fn print_transcript(transcript: &Transcript, persona: &str) {
    if transcript.is_empty() {
        println!("{}", Style::hint("No messages yet."));
        println!();
        return;
    }

    for turn in transcript.turns() {
        print_turn(turn, persona);
    }
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_session(config: &SessionConfig, session_id: Option<&str>) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}  {}",
        Style::label("session"),
        Style::value(session_id.unwrap_or("(none)"))
    );
    println!(
        "  {}  {}",
        Style::label("backend"),
        Style::secondary(&config.chat_url)
    );
    println!(
        "  {}    {}",
        Style::label("store"),
        Style::secondary(&config.store)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}        {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}     {}",
        Style::command("/history"),
        Style::secondary("Show the conversation so far")
    );
    println!(
        "  {}     {}",
        Style::command("/session"),
        Style::secondary("Show session id and backend")
    );
    println!(
        "  {} {}",
        Style::command("/suggest [n]"),
        Style::secondary("List suggested questions, or pre-fill the n-th")
    );
    println!(
        "  {}        {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
