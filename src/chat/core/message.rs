//! Chat message model.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chat::core::ids::MessageId;

/// Author of a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Sender {
    /// Person typing into the widget.
    #[serde(rename = "user")]
    User,
    /// Canned-reply assistant.
    #[serde(rename = "ai")]
    Assistant,
}

impl Sender {
    /// Stable string form for storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "ai",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "ai" => Ok(Self::Assistant),
            _ => Err(value.to_string()),
        }
    }
}

/// A single entry of the conversation log.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Store-unique, increasing identifier.
    pub id: MessageId,
    /// Who wrote the message.
    pub sender: Sender,
    /// Raw text, may contain line breaks.
    pub content: String,
    /// Display time captured at creation. Not used for ordering.
    pub timestamp: String,
}

impl Message {
    /// Build a message stamped with the current local time.
    #[must_use]
    pub fn new(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self::at(id, sender, content, Local::now())
    }

    /// Build a message stamped with an explicit time.
    #[must_use]
    pub fn at(
        id: MessageId,
        sender: Sender,
        content: impl Into<String>,
        time: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            sender,
            content: content.into(),
            timestamp: format_timestamp(&time),
        }
    }

    /// Whether the user wrote this message.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Two-digit hour and minute with an AM/PM marker, e.g. `03:07 PM`.
#[must_use]
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%I:%M %p").to_string()
}
