use clap::{Parser, Subcommand};

use crate::config::BACKEND_ENV;

#[derive(Parser, Debug)]
#[command(name = "philo")]
#[command(about = "Chat with the Dostoevsky AI philosopher from your terminal")]
#[command(version)]
pub struct Args {
    /// Chat service base URL (requests go to <url>/chat)
    #[arg(short = 'b', long, env = BACKEND_ENV, global = true)]
    pub backend: Option<String>,

    /// Name the assistant is shown as
    #[arg(short = 'p', long, global = true)]
    pub persona: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode (the default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show or reset the stored session id
    Session {
        /// Forget the stored session id; a new one is created on next use
        #[arg(long)]
        reset: bool,
    },
    /// Configure philo settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
