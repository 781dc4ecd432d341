//! Adapter error types.

use thiserror::Error;

/// Errors that can occur inside an input adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Could not reach the external service.
    #[error("Adapter unavailable: {0}")]
    Unavailable(String),

    /// HTTP request to the speech endpoint failed.
    #[error("Speech endpoint request failed: {0}")]
    RequestFailed(String),

    /// Speech endpoint response was not the expected JSON shape.
    #[error("Failed to parse speech endpoint response: {0}")]
    ParseError(String),

    /// IRC protocol violation or unexpected server response.
    #[error("Twitch IRC protocol error: {0}")]
    Protocol(String),

    /// Underlying socket I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The consumer side of the event channel is gone; time to shut down.
    #[error("Event channel closed")]
    ChannelClosed,
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AdapterError::Unavailable(err.to_string())
        } else if err.is_decode() {
            AdapterError::ParseError(err.to_string())
        } else {
            AdapterError::RequestFailed(err.to_string())
        }
    }
}
