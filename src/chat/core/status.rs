//! Memory status label derived from the message count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentational load indicator for the conversation log.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MemoryStatus {
    /// No messages.
    Empty,
    /// 1 to 19 messages.
    Optimized,
    /// 20 to 49 messages.
    Moderate,
    /// 50 messages or more.
    High,
}

impl MemoryStatus {
    /// Lower bound of [`Self::Moderate`].
    pub const MODERATE_FROM: usize = 20;
    /// Lower bound of [`Self::High`].
    pub const HIGH_FROM: usize = 50;

    /// Classify a message count.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            n if n < Self::MODERATE_FROM => Self::Optimized,
            n if n < Self::HIGH_FROM => Self::Moderate,
            _ => Self::High,
        }
    }

    /// Label shown next to the conversation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Optimized => "Optimized",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for MemoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
