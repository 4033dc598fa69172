// src/message.rs
use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_MODEL: &str = "model";

/// One turn of a conversation.
///
/// `role` is expected to be [`ROLE_USER`] or [`ROLE_MODEL`], but any string
/// is carried to the server unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    role: String,
    content: String,
}

impl HistoryItem {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(ROLE_MODEL, content)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// True for "user" and "model". Informational only; nothing rejects other roles.
    pub fn has_known_role(&self) -> bool {
        self.role == ROLE_USER || self.role == ROLE_MODEL
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalQueryRequest {
    pub query: String,
    #[serde(rename = "conversation_history")]
    pub conversation_history: Vec<HistoryItem>,
    #[serde(rename = "session_id")]
    pub session_id: String,
}

impl MedicalQueryRequest {
    pub fn new(
        query: impl Into<String>,
        conversation_history: Vec<HistoryItem>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            conversation_history,
            session_id: session_id.into(),
        }
    }
}

/// Reply from `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalQueryResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<String>,
}
