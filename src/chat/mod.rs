//! Conversation core for the NeuraChat widget.
//!
//! - `core`: configuration, errors, ids, messages, preferences, memory status
//! - `storage`: key-value slot backends (in-memory and file-per-key)
//! - `store`: the bounded conversation log and its persistence
//! - `responder`: keyword categories and canned replies
//! - `session`: the idle/awaiting-reply state machine and view seam

pub mod core;
pub mod responder;
pub mod session;
pub mod storage;
pub mod store;

pub use self::core::{
    ChatConfig, ChatError, ChatResult, MemoryStatus, Message, MessageId, MessageIdAllocator,
    Preferences, Sender,
};
pub use responder::{Reply, ReplyCategory, ResponseClassifier, categorize};
pub use session::{ChatSession, ChatView, NullView, PendingReply, SessionState, SubmitOutcome};
pub use storage::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use store::{ConversationLog, ConversationStore, retain_recent};
