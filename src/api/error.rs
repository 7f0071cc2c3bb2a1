//! REST Client Errors

use crate::models::CardId;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx HTTP status
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope says `"status": "error"`
    #[error("{message}")]
    Rejected { message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Expected one card for id {id}, got {count}")]
    Ambiguous { id: CardId, count: usize },
}

impl ApiError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the server".to_string(),
            ApiError::Status { message, .. } | ApiError::Rejected { message } => message.clone(),
            ApiError::Decode(_) | ApiError::Ambiguous { .. } => {
                "The server sent an unexpected response".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
