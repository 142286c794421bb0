//! # RuleBot HTTP API
//!
//! File: cli/src/commands/srv/api.rs
//!
//! ## Overview
//!
//! JSON payloads and route handlers for `rulebot srv`. Messages use the same
//! shape as the chat UI's message list (`id`, `text`, `sender`, `timestamp` in
//! epoch milliseconds), so a front end can append a reply without mapping.
//!
//! ```text
//! POST /api/messages   {"text": "what is 5 + 3"}
//! 200                  {"user": {"id": "...", "text": "what is 5 + 3",
//!                                "sender": "user", "timestamp": 1760000000000},
//!                       "message": {"id": "...", "text": "The answer is 8.",
//!                                   "sender": "bot", "timestamp": 1760000000000},
//!                       "rule": "arithmetic"}
//! 400                  {"error": "Message text cannot be empty."}
//! ```
//!
use crate::core::error::RulebotError;
use crate::responder::{rules, Responder};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Shared handler state. One responder serves every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder: Arc::new(responder),
        }
    }
}

/// Who wrote a message.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of a chat transcript.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Message {
    pub fn new(text: String, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            sender,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct MessageRequest {
    pub text: String,
}

/// The accepted user message and the bot's reply to it.
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub user: Message,
    pub message: Message,
    pub rule: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct RuleInfo {
    pub name: String,
    pub summary: String,
}

/// Error body returned by the API.
#[derive(Debug)]
pub struct ApiError(RulebotError);

impl From<RulebotError> for ApiError {
    fn from(err: RulebotError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RulebotError::EmptyMessage => StatusCode::BAD_REQUEST,
            RulebotError::Config(_) | RulebotError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("Request failed ({}): {}", status, self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// `POST /api/messages`
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(RulebotError::EmptyMessage.into());
    }

    let user = Message::new(text.to_string(), Sender::User);
    let reply = state.responder.explain(text);
    debug!(rule = reply.rule, "Answered HTTP message");
    Ok(Json(MessageResponse {
        user,
        message: Message::new(reply.text, Sender::Bot),
        rule: reply.rule.to_string(),
    }))
}

/// `GET /api/rules`
pub async fn list_rules() -> Json<Vec<RuleInfo>> {
    Json(
        rules::rules()
            .iter()
            .map(|r| RuleInfo {
                name: r.name.to_string(),
                summary: r.summary.to_string(),
            })
            .collect(),
    )
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
