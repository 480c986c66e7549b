use thiserror::Error;

/// Failures of the backend API calls. Every variant ends up in the console
/// log; only chat-request failures are additionally surfaced in the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(gloo_net::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Body(gloo_net::Error),
}
