// src/services/medical_chat.rs
use reqwest::{Client, Url};
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::{ChatClientError, ClientResult};
use crate::message::{MedicalQueryRequest, MedicalQueryResponse};

/// Client for the medical query service.
///
/// Cloning is cheap and clones share one connection pool. Each call to
/// [`send_medical_query`](Self::send_medical_query) is a single `POST` with no
/// retries; dropping the returned future abandons the exchange.
#[derive(Clone, Debug)]
pub struct MedicalChatClient {
    client: Client,
    endpoint: Url,
}

impl MedicalChatClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ChatClientError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint()?,
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn send_medical_query(
        &self,
        request: &MedicalQueryRequest,
    ) -> ClientResult<MedicalQueryResponse> {
        debug!(
            endpoint = %self.endpoint,
            session_id = %request.session_id,
            turns = request.conversation_history.len(),
            "sending medical query"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Status is kept even if the body cannot be read.
            let body = response.text().await.unwrap_or_default();
            warn!(%status, session_id = %request.session_id, "medical query rejected");
            return Err(ChatClientError::Server { status, body });
        }

        let body = response.text().await?;

        // Decoded by hand so schema mismatches stay apart from transport failures.
        serde_json::from_str(&body).map_err(|source| {
            error!(%source, session_id = %request.session_id, "undecodable medical query reply");
            ChatClientError::Decode { source, body }
        })
    }
}
