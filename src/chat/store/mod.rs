//! Conversation state: the message log, its retention cap and persistence.

pub mod conversation_store;
pub mod retention;

pub use conversation_store::{ConversationLog, ConversationStore};
pub use retention::retain_recent;
