//! Line-oriented view over any reader/writer pair.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::chat::core::config::ChatConfig;
use crate::chat::core::message::{Message, Sender};
use crate::chat::core::status::MemoryStatus;
use crate::chat::session::view::ChatView;

const CONTINUATION: char = '\\';
const EMPTY_STATE: &str = "Start a conversation. Try asking about technology, science, or general knowledge.";

/// Terminal rendition of the chat widget.
///
/// Only messages not printed yet are written on each render; a shorter log
/// than last time means the conversation was cleared.
pub struct TerminalView<I, W> {
    input: I,
    output: W,
    user_name: String,
    ai_name: String,
    shown: usize,
    status: MemoryStatus,
    dark_mode: bool,
}

impl<I: BufRead, W: Write> TerminalView<I, W> {
    /// Build a view using the display names from `config`.
    #[must_use]
    pub fn new(input: I, output: W, config: &ChatConfig) -> Self {
        Self {
            input,
            output,
            user_name: config.user_name.clone(),
            ai_name: config.ai_name.clone(),
            shown: 0,
            status: MemoryStatus::Empty,
            dark_mode: false,
        }
    }

    /// Read one line of user input without its line ending.
    /// `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns an error if the input cannot be read.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read one message. A line ending in `\` continues on the next line,
    /// joined with a line break. `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns an error if the input cannot be read.
    pub fn read_message(&mut self) -> std::io::Result<Option<String>> {
        let Some(mut message) = self.read_line()? else {
            return Ok(None);
        };
        while let Some(head) = message.strip_suffix(CONTINUATION) {
            let keep = head.len();
            message.truncate(keep);
            emit(&mut self.output, format_args!("... "));
            if let Err(err) = self.output.flush() {
                warn!("terminal flush failed: {err}");
            }
            let Some(next) = self.read_line()? else {
                break;
            };
            message.push('\n');
            message.push_str(&next);
        }
        Ok(Some(message))
    }

    /// Print the input prompt.
    pub fn prompt(&mut self) {
        emit(&mut self.output, format_args!("{}> ", self.user_name));
        if let Err(err) = self.output.flush() {
            warn!("terminal flush failed: {err}");
        }
    }

    /// Print the last memory status pushed by the session.
    pub fn show_status(&mut self) {
        let theme = if self.dark_mode { "dark" } else { "light" };
        emit(&mut self.output, format_args!("Memory: {} | Theme: {theme}\n", self.status));
    }

    /// Print the command list.
    pub fn show_help(&mut self) {
        emit(&mut self.output, format_args!(
            "Commands: /clear, /theme, /status, /help, /quit. Anything else is sent.\n\
             End a line with \\ to continue the message; start it with // to send a leading /.\n"
        ));
    }

    /// Last memory status pushed by the session.
    #[must_use]
    pub const fn status(&self) -> MemoryStatus {
        self.status
    }

    /// Consume the view and return the writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    fn sender_name(&self, sender: Sender) -> &str {
        match sender {
            Sender::User => &self.user_name,
            Sender::Assistant => &self.ai_name,
        }
    }

    fn print_message(&mut self, message: &Message) {
        let header = format!("[{}] {}:", message.timestamp, self.sender_name(message.sender));
        let mut lines = message.content.lines();
        let first = lines.next().unwrap_or_default();
        emit(&mut self.output, format_args!("{header} {first}\n"));
        for line in lines {
            emit(&mut self.output, format_args!("    {line}\n"));
        }
    }
}

fn emit<W: Write>(output: &mut W, args: fmt::Arguments<'_>) {
    if let Err(err) = output.write_fmt(args) {
        warn!("terminal write failed: {err}");
    }
}

impl<I: BufRead, W: Write> ChatView for TerminalView<I, W> {
    fn render(&mut self, messages: &[Message]) {
        if messages.is_empty() {
            emit(&mut self.output, format_args!("{EMPTY_STATE}\n"));
            self.shown = 0;
            return;
        }
        if messages.len() < self.shown {
            self.shown = 0;
        }
        for message in &messages[self.shown..] {
            self.print_message(message);
        }
        self.shown = messages.len();
    }

    fn set_typing(&mut self, visible: bool) {
        if visible {
            emit(&mut self.output, format_args!("{} is typing...\n", self.ai_name));
        }
    }

    fn set_memory_status(&mut self, status: MemoryStatus) {
        self.status = status;
    }

    fn apply_theme(&mut self, dark_mode: bool) {
        if dark_mode != self.dark_mode {
            let theme = if dark_mode { "dark" } else { "light" };
            emit(&mut self.output, format_args!("Theme: {theme}\n"));
        }
        self.dark_mode = dark_mode;
    }

    fn notify(&mut self, text: &str) {
        emit(&mut self.output, format_args!("* {text}\n"));
    }

    fn confirm_clear(&mut self) -> bool {
        emit(&mut self.output, format_args!(
            "Are you sure you want to clear all messages? This cannot be undone. [y/N] "
        ));
        if let Err(err) = self.output.flush() {
            warn!("terminal flush failed: {err}");
        }
        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                warn!("failed to read confirmation: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::chat::core::ids::MessageId;

    fn view(input: &str) -> TerminalView<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalView::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            &ChatConfig::default(),
        )
    }

    fn text(view: TerminalView<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&view.into_output()).into_owned()
    }

    fn message(id: u64, sender: Sender, content: &str) -> Message {
        Message {
            id: MessageId(id),
            sender,
            content: content.to_string(),
            timestamp: "10:00 AM".to_string(),
        }
    }

    #[test]
    fn test_render_prints_only_new_messages() {
        let mut v = view("");
        let first = message(1, Sender::User, "hello");
        let second = message(2, Sender::Assistant, "line one\nline two");
        v.render(std::slice::from_ref(&first));
        v.render(&[first, second]);
        assert_eq!(
            text(v),
            "[10:00 AM] You: hello\n[10:00 AM] Neura Assistant: line one\n    line two\n"
        );
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let mut v = view("");
        v.render(&[message(1, Sender::User, "a")]);
        v.render(&[]);
        v.render(&[message(2, Sender::User, "b")]);
        let out = text(v);
        assert!(out.contains(EMPTY_STATE));
        assert!(out.ends_with("[10:00 AM] You: b\n"));
    }

    #[test]
    fn test_confirm_clear_reads_answer() {
        let mut v = view("yes\nn\n");
        assert!(v.confirm_clear());
        assert!(!v.confirm_clear());
        assert!(!v.confirm_clear());
    }

    #[test]
    fn test_read_line_strips_line_endings() -> std::io::Result<()> {
        let mut v = view("hi there\r\n");
        assert_eq!(v.read_line()?.as_deref(), Some("hi there"));
        assert_eq!(v.read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_read_message_joins_continued_lines() -> std::io::Result<()> {
        let mut v = view("one\\\ntwo\\\nthree\nnext\ntrailing\\");
        assert_eq!(v.read_message()?.as_deref(), Some("one\ntwo\nthree"));
        assert_eq!(v.read_message()?.as_deref(), Some("next"));
        assert_eq!(v.read_message()?.as_deref(), Some("trailing"));
        assert_eq!(v.read_message()?, None);
        assert_eq!(text(v), "... ... ... ");
        Ok(())
    }

    #[test]
    fn test_status_and_theme() {
        let mut v = view("");
        v.set_memory_status(MemoryStatus::Moderate);
        v.apply_theme(true);
        v.show_status();
        assert_eq!(v.status(), MemoryStatus::Moderate);
        assert_eq!(text(v), "Theme: dark\nMemory: Moderate | Theme: dark\n");
    }
}
