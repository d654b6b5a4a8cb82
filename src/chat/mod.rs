//! Conversation with the philosopher chat service.
//!
//! The [`ChatController`] owns the transcript and the request cycle;
//! [`ChatSession`] is the interactive REPL rendered on top of it.

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod session;
mod transcript;
mod ui;

pub use controller::{APOLOGY, ChatController, PendingTurn, SubmitOutcome, TurnState};
pub use session::{ChatSession, SessionConfig};
pub use transcript::{Role, Transcript, Turn};
pub use ui::SUGGESTED_QUESTIONS;
