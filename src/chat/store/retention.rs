//! Retention policy for the persisted log.

use crate::chat::core::message::Message;

/// The most recent `max_messages` entries, in original order.
#[must_use]
pub fn retain_recent(messages: &[Message], max_messages: usize) -> &[Message] {
    &messages[messages.len().saturating_sub(max_messages)..]
}
