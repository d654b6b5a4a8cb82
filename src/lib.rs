//! # philo - Terminal chat with the AI philosopher
//!
//! `philo` is a command-line client for the Dostoevsky philosopher chat
//! service. Each question is sent together with the conversation so far and
//! a per-user session id that survives restarts.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat
//! PHILO_BACKEND_URL=https://chat.example.com philo
//!
//! # One question, answer on stdout
//! philo ask "What does Ivan say about suffering?"
//!
//! # Show or forget the session id
//! philo session
//! philo session --reset
//! ```
//!
//! ## Configuration
//!
//! The backend comes from `--backend`, then `PHILO_BACKEND_URL`, then
//! `~/.config/philo/config.toml`:
//!
//! ```toml
//! [chat]
//! backend = "https://chat.example.com"
//! persona = "Dostoevsky"
//! ```

/// Conversation state, the request cycle and the interactive REPL.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// HTTP client for the chat service.
pub mod service;

/// Session identifier creation and storage.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
