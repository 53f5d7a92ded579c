//! Send/reply state machine types.

use std::fmt;

use crate::chat::core::ids::MessageId;

/// Whether the session is waiting on an assistant reply.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SessionState {
    /// Ready to accept user input.
    #[default]
    Idle,
    /// A reply is pending; new input is rejected.
    AwaitingReply,
}

impl SessionState {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingReply => "awaiting_reply",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof that a user message was accepted and a reply is owed.
///
/// Only [`super::ChatSession::submit`] creates one, and
/// [`super::ChatSession::complete`] consumes it.
#[derive(Debug)]
pub struct PendingReply {
    pub(crate) prompt: String,
    pub(crate) user_message: MessageId,
}

impl PendingReply {
    /// Trimmed user text the reply answers.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Id of the accepted user message.
    #[must_use]
    pub const fn user_message(&self) -> MessageId {
        self.user_message
    }
}

/// Result of offering user input to the session.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored; complete the reply with the token.
    Accepted(PendingReply),
    /// Empty or whitespace-only input.
    Ignored,
    /// A reply is still pending.
    Rejected,
}

impl SubmitOutcome {
    /// Whether the input was stored.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}
