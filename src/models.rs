use serde::{Deserialize, Serialize};

/// Model identifiers the backend accepts for `/chat`.
pub const SUPPORTED_MODELS: &[&str] = &["gemma-2-logql", "llama-3.1-logql"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversation turn as the backend sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Request body for `POST /chat`: the selected model plus the full
/// conversation so far.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// Response from `POST /chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Positive,
    Negative,
}

/// Request body for `POST /feedback`. `user_id`/`chat_id` are whatever the
/// session cookies hold; the backend accepts `null` for a missing cookie.
/// `message_idx` is the zero-based position of the rated message in the
/// rendered transcript.
#[derive(Clone, Debug, Serialize)]
pub struct FeedbackRequest {
    pub feedback_type: FeedbackType,
    pub user_id: Option<String>,
    pub chat_id: Option<String>,
    pub message_idx: usize,
}

/// Response from `GET /get_chat/:chat_id`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatHistory {
    pub messages: Vec<Message>,
}

/// One entry of the prior-chat index the server embeds in the page
/// (`<script id="chat-index">`): chat id plus its first message as title.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
}
