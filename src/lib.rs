//! Client for the medical query chat service.
//!
//! ```no_run
//! use medical_chat_client::{ClientConfig, Conversation, MedicalChatClient};
//!
//! # async fn run() -> Result<(), medical_chat_client::ChatClientError> {
//! let client = MedicalChatClient::new(&ClientConfig::new("http://localhost:8000")?)?;
//! let mut conversation = Conversation::new();
//! let reply = conversation.ask(&client, "What does a headache with fever indicate?").await?;
//! println!("{}", reply.response);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod services;

pub use config::ClientConfig;
pub use error::{ChatClientError, ClientResult};
pub use message::{HistoryItem, MedicalQueryRequest, MedicalQueryResponse};
pub use services::conversation::Conversation;
pub use services::medical_chat::MedicalChatClient;
