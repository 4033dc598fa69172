pub mod conversation;
pub mod medical_chat;
