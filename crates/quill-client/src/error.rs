//! Client-side error types.

use thiserror::Error;

/// A failed call to the post API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered 404.
    #[error("Post not found")]
    NotFound,

    /// Any other non-success status.
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ClientError {
    /// Message shown to the user when `action` (e.g. "fetch posts") fails.
    ///
    /// A 404 always reads "Post not found"; a 400 shows the server's
    /// validation detail when there is one.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ClientError::NotFound => "Post not found".to_string(),
            ClientError::Rejected {
                status: 400,
                detail: Some(detail),
            } => detail.clone(),
            _ => format!("Failed to {action}"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
