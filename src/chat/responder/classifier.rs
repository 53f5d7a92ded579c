//! Keyword-based reply selection.
//!
//! Input is lowercased and tested for plain substring containment against
//! each rule in priority order. The first matching rule picks the category,
//! then one reply of that category is drawn uniformly at random.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::responder::replies;

/// Reply group selected from the input keywords.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyCategory {
    /// Salutations.
    Greeting,
    /// Computers, software, AI.
    Technology,
    /// Natural sciences.
    Science,
    /// Questions about what the assistant can do.
    Help,
    /// Nothing matched.
    Default,
}

impl ReplyCategory {
    /// Every category, in matching priority order.
    pub const ALL: [Self; 5] = [
        Self::Greeting,
        Self::Technology,
        Self::Science,
        Self::Help,
        Self::Default,
    ];

    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Technology => "technology",
            Self::Science => "science",
            Self::Help => "help",
            Self::Default => "default",
        }
    }

    /// Candidate replies for this category.
    #[must_use]
    pub const fn replies(self) -> &'static [&'static str] {
        match self {
            Self::Greeting => replies::GREETING,
            Self::Technology => replies::TECHNOLOGY,
            Self::Science => replies::SCIENCE,
            Self::Help => replies::HELP,
            Self::Default => replies::FALLBACK,
        }
    }
}

impl fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword set mapping to a category.
struct KeywordRule {
    category: ReplyCategory,
    keywords: &'static [&'static str],
}

/// Checked top to bottom, first hit wins.
const RULES: &[KeywordRule] = &[
    KeywordRule {
        category: ReplyCategory::Greeting,
        keywords: &["hello", "hi", "hey"],
    },
    KeywordRule {
        category: ReplyCategory::Technology,
        keywords: &["tech", "computer", "ai", "software"],
    },
    KeywordRule {
        category: ReplyCategory::Science,
        keywords: &["science", "physics", "biology", "chemistry"],
    },
    KeywordRule {
        category: ReplyCategory::Help,
        keywords: &["help", "what can you do", "capabilities"],
    },
];

/// Pick the category for `text`. Deterministic.
#[must_use]
pub fn categorize(text: &str) -> ReplyCategory {
    let normalized = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map_or(ReplyCategory::Default, |rule| rule.category)
}

/// A chosen reply and the category it came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reply {
    /// Matched category.
    pub category: ReplyCategory,
    /// Reply text, one of `category.replies()`.
    pub text: &'static str,
}

/// Canned-reply generator with an injectable random source.
pub struct ResponseClassifier<R = StdRng> {
    rng: R,
}

impl ResponseClassifier<StdRng> {
    /// Classifier seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Classifier with a fixed seed, for reproducible picks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ResponseClassifier<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ResponseClassifier<R> {
    /// Classifier drawing from `rng`.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Categorize `text` and draw a reply from that category.
    pub fn respond(&mut self, text: &str) -> Reply {
        let category = categorize(text);
        let candidates = category.replies();
        let text = candidates[self.rng.gen_range(0..candidates.len())];
        debug!(%category, "reply selected");
        Reply { category, text }
    }

    /// Reply text for `text`.
    pub fn classify(&mut self, text: &str) -> &'static str {
        self.respond(text).text
    }
}
