mod client;

pub use client::{ChatRequest, ChatService, HttpChatService};
