//! Conversation state and the single-flight request cycle.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;

use super::transcript::{Transcript, Turn};
use crate::service::{ChatRequest, ChatService};
use crate::session::SessionId;

/// Assistant reply used whenever the chat service cannot be reached.
pub const APOLOGY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again.";

static NEXT_CONTROLLER: AtomicU64 = AtomicU64::new(0);

/// Whether a request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Sending,
}

/// What happened to a submitted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank, a request was already outstanding, or there is no
    /// session yet. Nothing changed.
    Ignored,
    /// The service answered.
    Answered,
    /// The service failed and the apology was appended instead.
    Failed,
}

/// A turn that occupies the request slot until passed to
/// [`ChatController::finish_turn`] of the controller that created it.
#[derive(Debug)]
pub struct PendingTurn {
    owner: u64,
    session_id: SessionId,
    question: String,
    history: Vec<Turn>,
}

impl PendingTurn {
    pub fn request(&self) -> ChatRequest<'_> {
        ChatRequest {
            session_id: &self.session_id,
            question: &self.question,
            chat_history: &self.history,
        }
    }
}

/// Owns the transcript and drives one service call per user turn.
pub struct ChatController<S> {
    id: u64,
    service: S,
    session_id: Option<SessionId>,
    transcript: Transcript,
    input: String,
    state: TurnState,
}

impl<S> ChatController<S> {
    pub fn new(service: S) -> Self {
        Self {
            id: NEXT_CONTROLLER.fetch_add(1, Ordering::Relaxed),
            service,
            session_id: None,
            transcript: Transcript::new(),
            input: String::new(),
            state: TurnState::Idle,
        }
    }

    #[must_use]
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub const fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The pending input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub const fn state(&self) -> TurnState {
        self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, TurnState::Sending)
    }

    /// Appends the user turn and claims the request slot.
    ///
    /// Returns `None` without touching any state when the input is blank,
    /// a turn is already pending, or no session id is set.
    pub fn begin_turn(&mut self, input: &str) -> Option<PendingTurn> {
        if input.trim().is_empty() || self.is_loading() {
            return None;
        }
        let session_id = self.session_id.clone()?;

        let history = self.transcript.turns().to_vec();
        self.transcript.push(Turn::user(input));
        self.input.clear();
        self.state = TurnState::Sending;

        Some(PendingTurn {
            owner: self.id,
            session_id,
            question: input.to_string(),
            history,
        })
    }

    /// Appends the assistant turn for `pending` and releases the slot.
    ///
    /// A failed `answer` becomes the [`APOLOGY`] turn; the error is logged
    /// and not returned. A turn begun by another controller is dropped and
    /// reported as [`SubmitOutcome::Ignored`].
    pub fn finish_turn(&mut self, pending: PendingTurn, answer: Result<String>) -> SubmitOutcome {
        if pending.owner != self.id || !self.is_loading() {
            tracing::warn!(
                session_id = %pending.session_id,
                "dropping a turn that was not begun by this conversation"
            );
            return SubmitOutcome::Ignored;
        }

        let outcome = match answer {
            Ok(answer) => {
                self.transcript.push(Turn::assistant(answer));
                SubmitOutcome::Answered
            }
            Err(e) => {
                tracing::warn!(
                    error = %format!("{e:#}"),
                    session_id = %pending.session_id,
                    "failed to fetch response"
                );
                self.transcript.push(Turn::assistant(APOLOGY));
                SubmitOutcome::Failed
            }
        };

        self.state = TurnState::Idle;
        outcome
    }
}

impl<S: ChatService> ChatController<S> {
    /// Runs one full turn: user turn, service call, assistant turn.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let Some(pending) = self.begin_turn(input) else {
            tracing::debug!(loading = self.is_loading(), "submit ignored");
            return SubmitOutcome::Ignored;
        };

        let answer = self.service.ask(&pending.request()).await;
        self.finish_turn(pending, answer)
    }

    /// Submits the pending input text.
    pub async fn submit_input(&mut self) -> SubmitOutcome {
        let input = self.input.clone();
        self.submit(&input).await
    }
}
