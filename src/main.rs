use anyhow::Result;
use clap::Parser;

use philo_chat::cli::commands::{ask, chat, configure, session};
use philo_chat::cli::{Args, Command};
use philo_chat::config::ResolveOptions;
use philo_chat::{logging, output};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(output::OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose, args.quiet);

    let resolve = ResolveOptions {
        backend: args.backend,
        persona: args.persona,
    };

    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(resolve).await?;
        }
        Some(Command::Ask { question }) => {
            let options = ask::AskOptions {
                resolve,
                question: question.join(" "),
            };
            let code = ask::run_ask(options).await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
        Some(Command::Session { reset }) => {
            session::run_session(reset)?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}
