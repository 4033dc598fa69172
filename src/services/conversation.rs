// src/services/conversation.rs
use uuid::Uuid;

use crate::error::ClientResult;
use crate::message::{HistoryItem, MedicalQueryRequest, MedicalQueryResponse};
use crate::services::medical_chat::MedicalChatClient;

/// A single chat session held on the client side.
///
/// Turns are only recorded after the server replies, so a failed call leaves
/// the history as it was.
#[derive(Clone, Debug)]
pub struct Conversation {
    session_id: String,
    history: Vec<HistoryItem>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_session_id(Uuid::new_v4().to_string())
    }

    pub fn with_session_id(id: impl Into<String>) -> Self {
        Self {
            session_id: id.into(),
            history: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn build_request(&self, query: impl Into<String>) -> MedicalQueryRequest {
        MedicalQueryRequest::new(query, self.history.clone(), self.session_id.clone())
    }

    pub async fn ask(
        &mut self,
        client: &MedicalChatClient,
        query: &str,
    ) -> ClientResult<MedicalQueryResponse> {
        let request = self.build_request(query);
        let reply = client.send_medical_query(&request).await?;

        self.history.push(HistoryItem::user(query));
        self.history.push(HistoryItem::model(reply.response.clone()));
        Ok(reply)
    }

    /// Forget all turns but keep the session id.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
