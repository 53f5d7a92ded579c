//! Message identifiers.
//!
//! Ids come from a per-store monotonic counter, so two messages created in the
//! same clock tick still get distinct, ordered ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a single chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Wrap a raw integer id.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Extract the raw integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MessageId {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for MessageId {
    type Err = std::num::ParseIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Monotonic id source owned by a single store.
#[derive(Debug, Clone)]
pub struct MessageIdAllocator {
    next: u64,
}

impl Default for MessageIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl MessageIdAllocator {
    /// Hand out the next id.
    pub const fn allocate(&mut self) -> MessageId {
        let id = MessageId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Make sure later allocations are strictly greater than `id`.
    pub fn observe(&mut self, id: MessageId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }

    /// Id that the next call to [`Self::allocate`] will return.
    #[must_use]
    pub const fn peek(&self) -> MessageId {
        MessageId(self.next)
    }
}
