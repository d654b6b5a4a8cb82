use anyhow::Result;

use super::load_resolved_config;
use crate::chat::{ChatController, ChatSession, SessionConfig};
use crate::config::ResolveOptions;
use crate::service::HttpChatService;
use crate::session::{get_or_create_session_id, open_default_store};

pub async fn run_chat(options: ResolveOptions) -> Result<()> {
    let config = load_resolved_config(&options)?;

    let mut store = open_default_store();
    let session_id = get_or_create_session_id(store.as_mut());

    let service = HttpChatService::new(&config.backend);
    let session_config = SessionConfig {
        persona: config.persona,
        chat_url: service.url().to_string(),
        store: store.describe(),
    };

    tracing::info!(
        url = %session_config.chat_url,
        session_id = %session_id,
        "starting chat session"
    );

    let controller = ChatController::new(service).with_session_id(session_id);
    let mut session = ChatSession::new(session_config, controller);
    session.run().await
}
