use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::chat::Turn;
use crate::session::SessionId;

/// Request body sent to the chat service for one turn.
///
/// `chat_history` is the transcript as it was before `question` was asked.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub session_id: &'a SessionId,
    pub question: &'a str,
    pub chat_history: &'a [Turn],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    answer: String,
}

/// The remote collaborator that answers questions.
pub trait ChatService {
    /// Sends one question and returns the answer text.
    ///
    /// Every failure (transport, status, body) is reported as an error;
    /// callers are not expected to tell them apart.
    fn ask(&self, request: &ChatRequest<'_>) -> impl Future<Output = Result<String>> + Send;
}

/// [`ChatService`] reached over HTTP at `<backend>/chat`.
pub struct HttpChatService {
    client: Client,
    url: String,
}

impl HttpChatService {
    pub fn new(backend: &str) -> Self {
        Self {
            client: Client::new(),
            url: chat_url(backend),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ChatService for HttpChatService {
    async fn ask(&self, request: &ChatRequest<'_>) -> Result<String> {
        tracing::debug!(
            url = %self.url,
            session_id = %request.session_id,
            history_len = request.chat_history.len(),
            "sending chat request"
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to chat service: {}", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat service request failed with status {status}: {body}");
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Chat service returned a malformed response body")?;

        Ok(body.answer)
    }
}

fn chat_url(backend: &str) -> String {
    format!("{}/chat", backend.trim_end_matches('/'))
}
