use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LeadsError;

/// Phone number quoted when the assistant is unreachable.
pub const SUPPORT_PHONE: &str = "+91 98200 45670";

/// Mailbox quoted when the assistant is unreachable.
pub const SUPPORT_EMAIL: &str = "care@apexpromed.example";

/// Who authored a conversation turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One turn of the widget conversation, as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Request body for the assistant endpoint: the new message plus the
/// conversation so far (the upstream is stateless).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation: Vec<ChatMessage>,
}

/// Success response from the assistant endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// The fixed reply shown when the assistant cannot be reached. Keeps the
/// widget useful: the visitor always gets a way to contact a human.
pub fn fallback_reply() -> String {
    format!(
        "Our assistant is unavailable right now. Please call us on {SUPPORT_PHONE} \
         or write to {SUPPORT_EMAIL} and our team will get back to you."
    )
}

/// Client for the upstream chat assistant.
///
/// One fire-and-await POST per widget message, with no retry and no
/// cancellation. Callers replace any error with [`fallback_reply`]; a
/// broken assistant must never break the page.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward one conversation turn and return the assistant's reply.
    pub async fn reply(&self, request: &ChatRequest) -> Result<String, LeadsError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LeadsError::Upstream {
                status: status.as_u16(),
            });
        }
        let reply: ChatReply = response.json().await?;
        Ok(reply.reply)
    }
}
