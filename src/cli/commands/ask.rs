use anyhow::Result;

use super::load_resolved_config;
use crate::chat::{ChatController, SubmitOutcome};
use crate::config::ResolveOptions;
use crate::service::HttpChatService;
use crate::session::{get_or_create_session_id, open_default_store};
use crate::ui::Spinner;

pub struct AskOptions {
    pub resolve: ResolveOptions,
    pub question: String,
}

/// Asks one question in the stored session and prints the answer.
///
/// Returns the process exit code: `UNAVAILABLE` when the service could not
/// answer (the apology is still printed).
pub async fn run_ask(options: AskOptions) -> Result<exitcode::ExitCode> {
    let config = load_resolved_config(&options.resolve)?;

    let mut store = open_default_store();
    let session_id = get_or_create_session_id(store.as_mut());

    let service = HttpChatService::new(&config.backend);
    let mut controller = ChatController::new(service).with_session_id(session_id);

    let spinner = Spinner::new(&format!("{} is thinking...", config.persona));
    let outcome = controller.submit(&options.question).await;
    spinner.stop();

    if outcome == SubmitOutcome::Ignored {
        anyhow::bail!("Question is empty");
    }

    if let Some(turn) = controller.transcript().last() {
        println!("{}", turn.content);
    }

    Ok(match outcome {
        SubmitOutcome::Failed => exitcode::UNAVAILABLE,
        _ => exitcode::OK,
    })
}
