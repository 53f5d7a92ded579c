//! Terminal front-end: reads lines, drives a [`ChatSession`], prints replies.

pub mod view;

pub use view::TerminalView;

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::chat::session::chat_session::ChatSession;
use crate::chat::storage::kv_store::KeyValueStore;

/// A parsed input line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Send the text as a user message.
    Send(String),
    /// Clear the conversation.
    Clear,
    /// Toggle dark/light theme.
    Theme,
    /// Show the memory status.
    Status,
    /// List commands.
    Help,
    /// Leave the loop.
    Quit,
}

impl Command {
    /// Interpret one input line.
    ///
    /// Only the known names below are commands. Any other line, including
    /// one that starts with an unknown `/word`, is sent as text. A leading
    /// `//` sends the rest with a single `/`.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("//") {
            return Self::Send(format!("/{rest}"));
        }
        let Some(name) = trimmed.strip_prefix('/') else {
            return Self::Send(line.to_string());
        };
        match name.to_ascii_lowercase().as_str() {
            "clear" => Self::Clear,
            "theme" => Self::Theme,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Send(line.to_string()),
        }
    }
}

/// Run the read/dispatch loop until `/quit` or end of input.
///
/// # Errors
/// Returns an error if reading from the input fails.
pub async fn run_session<S, I, W, R>(
    session: &mut ChatSession<S, TerminalView<I, W>, R>,
) -> std::io::Result<()>
where
    S: KeyValueStore,
    I: BufRead,
    W: Write,
    R: Rng,
{
    session.start();
    session.view_mut().show_help();

    loop {
        session.view_mut().prompt();
        let Some(line) = session.view_mut().read_message()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Send(text) => {
                if session.send(&text).await.is_none() {
                    debug!("input produced no reply");
                }
            }
            Command::Clear => {
                session.clear();
            }
            Command::Theme => {
                session.toggle_theme();
            }
            Command::Status => session.view_mut().show_status(),
            Command::Help => session.view_mut().show_help(),
            Command::Quit => break,
        }
    }

    Ok(())
}
