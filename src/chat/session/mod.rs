//! Send/reply flow on top of the conversation store.
//!
//! A session is either idle or waiting for a reply. `submit` moves it to
//! `AwaitingReply` and hands out a [`PendingReply`]; `complete` consumes that
//! token and is the only way back to `Idle`.

pub mod chat_session;
pub mod state;
pub mod view;

pub use chat_session::ChatSession;
pub use state::{PendingReply, SessionState, SubmitOutcome};
pub use view::{CLEARED_NOTICE, ChatView, NullView};
