//! Configuration for the chat core.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::core::errors::{ChatError, ChatResult};

/// Default slot name for the conversation log.
pub const DEFAULT_STORAGE_KEY: &str = "neurachat_conversations";
/// Default slot name for the theme preference.
pub const DEFAULT_THEME_KEY: &str = "neurachat_theme";

/// Top-level configuration for a chat session and its store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Slot holding the serialized conversation log.
    pub storage_key: String,
    /// Slot holding the theme preference.
    pub theme_key: String,
    /// Retention cap for the persisted log.
    pub max_messages: usize,
    /// Simulated thinking time before a reply, in milliseconds.
    pub typing_delay_ms: u64,
    /// Display label for assistant messages.
    pub ai_name: String,
    /// Display label for user messages.
    pub user_name: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            max_messages: 100,
            typing_delay_ms: 800,
            ai_name: "Neura Assistant".to_string(),
            user_name: "You".to_string(),
        }
    }
}

impl ChatConfig {
    /// Create a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retention cap.
    #[must_use]
    pub const fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    /// Set the typing delay in milliseconds.
    #[must_use]
    pub const fn with_typing_delay_ms(mut self, typing_delay_ms: u64) -> Self {
        self.typing_delay_ms = typing_delay_ms;
        self
    }

    /// Set the log slot name.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Typing delay as a [`Duration`].
    #[must_use]
    pub const fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// Apply `NEURACHAT_*` environment overrides on top of `self`.
    ///
    /// Unparsable numeric values are ignored.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("NEURACHAT_STORAGE_KEY") {
            self.storage_key = key;
        }
        if let Some(max) = lookup("NEURACHAT_MAX_MESSAGES").and_then(|v| v.parse().ok()) {
            self.max_messages = max;
        }
        if let Some(delay) = lookup("NEURACHAT_TYPING_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.typing_delay_ms = delay;
        }
        if let Some(name) = lookup("NEURACHAT_AI_NAME") {
            self.ai_name = name;
        }
        if let Some(name) = lookup("NEURACHAT_USER_NAME") {
            self.user_name = name;
        }
        self
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> ChatResult<()> {
        if self.max_messages == 0 {
            return Err(ChatError::InvalidConfig(
                "max_messages must be > 0".to_string(),
            ));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ChatError::InvalidConfig(
                "storage_key must not be empty".to_string(),
            ));
        }

        if self.theme_key.trim().is_empty() {
            return Err(ChatError::InvalidConfig(
                "theme_key must not be empty".to_string(),
            ));
        }

        if self.storage_key == self.theme_key {
            return Err(ChatError::InvalidConfig(format!(
                "storage_key and theme_key must differ (both are {})",
                self.storage_key
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget() {
        let config = ChatConfig::default();
        assert_eq!(config.max_messages, 100);
        assert_eq!(config.typing_delay(), Duration::from_millis(800));
        assert_eq!(config.storage_key, "neurachat_conversations");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let config = ChatConfig::new().with_max_messages(0);
        assert!(matches!(
            config.validate(),
            Err(ChatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_shared_slot() {
        let config = ChatConfig::new().with_storage_key(DEFAULT_THEME_KEY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_skip_unparsable_numbers() {
        let config = ChatConfig::new().apply_overrides(|name| match name {
            "NEURACHAT_MAX_MESSAGES" => Some("not-a-number".to_string()),
            "NEURACHAT_TYPING_DELAY_MS" => Some("25".to_string()),
            "NEURACHAT_AI_NAME" => Some("Bot".to_string()),
            _ => None,
        });
        assert_eq!(config.max_messages, 100);
        assert_eq!(config.typing_delay_ms, 25);
        assert_eq!(config.ai_name, "Bot");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"max_messages": 5}"#).unwrap_or_default();
        assert_eq!(config.max_messages, 5);
        assert_eq!(config.user_name, "You");
    }
}
