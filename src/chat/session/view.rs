//! Display collaborator driven by the session.

use crate::chat::core::message::Message;
use crate::chat::core::status::MemoryStatus;

/// Notification shown after a successful clear.
pub const CLEARED_NOTICE: &str = "Chat cleared successfully";

/// Surface the session pushes state to.
pub trait ChatView {
    /// Show the whole log. An empty slice means the empty-state placeholder.
    fn render(&mut self, messages: &[Message]);

    /// Show or hide the typing indicator.
    fn set_typing(&mut self, visible: bool);

    /// Update the memory status label.
    fn set_memory_status(&mut self, status: MemoryStatus);

    /// Switch between dark and light presentation.
    fn apply_theme(&mut self, dark_mode: bool);

    /// Show a transient notification.
    fn notify(&mut self, text: &str);

    /// Ask before wiping the conversation.
    fn confirm_clear(&mut self) -> bool {
        true
    }
}

/// View that ignores everything, for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl ChatView for NullView {
    fn render(&mut self, _messages: &[Message]) {}

    fn set_typing(&mut self, _visible: bool) {}

    fn set_memory_status(&mut self, _status: MemoryStatus) {}

    fn apply_theme(&mut self, _dark_mode: bool) {}

    fn notify(&mut self, _text: &str) {}
}
