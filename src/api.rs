//! Backend API calls. The frontend is served from the same origin as the
//! API, so all paths are relative.

use gloo_net::http::Request;

use crate::errors::ApiError;
use crate::models::{ChatHistory, ChatRequest, ChatResponse, FeedbackRequest, Message};

/// Sends the full conversation to `POST /chat` and returns the assistant's
/// reply.
pub async fn send_chat(model: &str, messages: Vec<Message>) -> Result<ChatResponse, ApiError> {
    let body = ChatRequest { model: model.to_string(), messages };

    let resp = Request::post("/chat")
        .json(&body)
        .map_err(ApiError::Body)?
        .send()
        .await
        .map_err(ApiError::Network)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    resp.json::<ChatResponse>().await.map_err(ApiError::Body)
}

/// Posts a thumbs-up/down rating to `POST /feedback`. The response body is
/// parsed only to confirm the call went through; its content is ignored.
pub async fn send_feedback(feedback: &FeedbackRequest) -> Result<(), ApiError> {
    let resp = Request::post("/feedback")
        .json(feedback)
        .map_err(ApiError::Body)?
        .send()
        .await
        .map_err(ApiError::Network)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    resp.json::<serde_json::Value>()
        .await
        .map(|_| ())
        .map_err(ApiError::Body)
}

/// Fetches the stored transcript of an existing chat.
pub async fn fetch_chat(chat_id: &str) -> Result<Vec<Message>, ApiError> {
    let resp = Request::get(&format!("/get_chat/{chat_id}"))
        .send()
        .await
        .map_err(ApiError::Network)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    resp.json::<ChatHistory>()
        .await
        .map(|h| h.messages)
        .map_err(ApiError::Body)
}
