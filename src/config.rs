// src/config.rs
use std::time::Duration;

use reqwest::Url;

use crate::error::{ChatClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const QUERY_PATH: &str = "query";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut url = Url::parse(base_url.trim())
            .map_err(|e| ChatClientError::Config(format!("invalid base url {base_url:?}: {e}")))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ChatClientError::Config(format!(
                "base url must be http(s): {base_url:?}"
            )));
        }

        // Url::join would silently drop these.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ChatClientError::Config(format!(
                "base url must not carry a query or fragment: {base_url:?}"
            )));
        }

        // Url::join replaces the last segment unless the path ends in '/'.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    /// Reads `MEDICAL_CHAT_BASE_URL` and `MEDICAL_CHAT_TIMEOUT_SECS` from the process environment.
    /// Loading a `.env` file is left to the application.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_vars(
            std::env::var("MEDICAL_CHAT_BASE_URL").ok(),
            std::env::var("MEDICAL_CHAT_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> ClientResult<Self> {
        let config = Self::new(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        match timeout_secs {
            None => Ok(config),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(config.with_timeout(Duration::from_secs(secs))),
                _ => Err(ChatClientError::Config(format!(
                    "MEDICAL_CHAT_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                ))),
            },
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn endpoint(&self) -> ClientResult<Url> {
        self.base_url
            .join(QUERY_PATH)
            .map_err(|e| ChatClientError::Config(format!("cannot resolve query endpoint: {e}")))
    }
}
