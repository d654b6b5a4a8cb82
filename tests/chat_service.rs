#![allow(clippy::unwrap_used)]
//! Chat turns against a mock chat service.
//!
//! These tests drive the real HTTP client through the controller and
//! check both the wire contract and the transcript that results.

use philo_chat::chat::{APOLOGY, ChatController, SubmitOutcome, Turn};
use philo_chat::service::{ChatRequest, ChatService, HttpChatService};
use philo_chat::session::SessionId;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUESTION: &str = "What does Ivan say about suffering?";

fn session_id() -> SessionId {
    SessionId::new("session_1700000000000_abc1234").unwrap()
}

fn controller(server: &MockServer) -> ChatController<HttpChatService> {
    ChatController::new(HttpChatService::new(&server.uri())).with_session_id(session_id())
}

#[tokio::test]
async fn test_answer_is_appended() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "session_id": "session_1700000000000_abc1234",
            "question": QUESTION,
            "chat_history": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Ivan argues..."})))
        .expect(1)
        .mount(&server)
        .await;

    let mut chat = controller(&server);
    chat.set_input(QUESTION);

    let outcome = chat.submit_input().await;

    assert_eq!(outcome, SubmitOutcome::Answered);
    assert_eq!(
        chat.transcript().turns(),
        &[Turn::user(QUESTION), Turn::assistant("Ivan argues...")]
    );
    assert!(!chat.is_loading());
    assert_eq!(chat.input(), "");
}

#[tokio::test]
async fn test_second_turn_sends_prior_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({
            "session_id": "session_1700000000000_abc1234",
            "question": "And the Grand Inquisitor?",
            "chat_history": [
                {"role": "user", "content": QUESTION},
                {"role": "assistant", "content": "Ivan argues..."}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "He argues..."})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Ivan argues..."})))
        .mount(&server)
        .await;

    let mut chat = controller(&server);
    chat.submit(QUESTION).await;
    let outcome = chat.submit("And the Grand Inquisitor?").await;

    assert_eq!(outcome, SubmitOutcome::Answered);
    assert_eq!(chat.transcript().len(), 4);
    assert_eq!(
        chat.transcript().last(),
        Some(&Turn::assistant("He argues..."))
    );
}

#[tokio::test]
async fn test_server_error_becomes_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut chat = controller(&server);
    let outcome = chat.submit(QUESTION).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        chat.transcript().turns(),
        &[Turn::user(QUESTION), Turn::assistant(APOLOGY)]
    );
    assert!(!chat.is_loading());
}

#[tokio::test]
async fn test_malformed_body_becomes_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "wrong field"})))
        .mount(&server)
        .await;

    let mut chat = controller(&server);
    let outcome = chat.submit(QUESTION).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(chat.transcript().last(), Some(&Turn::assistant(APOLOGY)));
}

#[tokio::test]
async fn test_unreachable_service_becomes_apology() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let mut chat = ChatController::new(HttpChatService::new(&uri)).with_session_id(session_id());
    let outcome = chat.submit(QUESTION).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(chat.transcript().len(), 2);
    assert!(!chat.is_loading());
}

#[tokio::test]
async fn test_blank_input_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let mut chat = controller(&server);

    assert_eq!(chat.submit("  ").await, SubmitOutcome::Ignored);
    assert!(chat.transcript().is_empty());
}

#[tokio::test]
async fn test_client_reports_status_in_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = HttpChatService::new(&format!("{}/api/", server.uri()));
    let id = session_id();
    let request = ChatRequest {
        session_id: &id,
        question: QUESTION,
        chat_history: &[],
    };

    let err = service.ask(&request).await.unwrap_err();

    assert!(err.to_string().contains("503"));
}
