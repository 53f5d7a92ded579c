//! Core chat types and identifiers.

pub mod config;
pub mod errors;
pub mod ids;
pub mod message;
pub mod preferences;
pub mod status;

pub use config::{ChatConfig, DEFAULT_STORAGE_KEY, DEFAULT_THEME_KEY};
pub use errors::{ChatError, ChatResult};
pub use ids::{MessageId, MessageIdAllocator};
pub use message::{Message, Sender, format_timestamp};
pub use preferences::{Preferences, THEME_DARK, THEME_LIGHT};
pub use status::MemoryStatus;
