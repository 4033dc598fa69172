// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatClientError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Connection, DNS, timeout or body-read failure. Never retried here.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error ({status}): {body}")]
    Server { status: StatusCode, body: String },

    /// The server answered 2xx but the body does not match the response schema.
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl ChatClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ChatClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatClientError::Transport(e) if e.is_timeout())
    }
}

pub type ClientResult<T> = Result<T, ChatClientError>;
