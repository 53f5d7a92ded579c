//! Conversation log with a bounded persisted copy.
//!
//! The store keeps the full log in memory and writes the most recent
//! `max_messages` entries to the log slot on [`ConversationStore::persist`].
//! Preferences live in their own slot. Nothing here is fatal: unreadable or
//! unwritable slots are logged and replaced with empty/default values.

use tracing::{debug, error, info, warn};

use crate::chat::core::config::ChatConfig;
use crate::chat::core::ids::MessageIdAllocator;
use crate::chat::core::message::{Message, Sender};
use crate::chat::core::preferences::Preferences;
use crate::chat::core::status::MemoryStatus;
use crate::chat::storage::kv_store::KeyValueStore;
use crate::chat::store::retention::retain_recent;

/// Ordered message log, oldest first.
pub type ConversationLog = Vec<Message>;

/// Owner of the message log and theme preference for one conversation.
pub struct ConversationStore<S> {
    storage: S,
    config: ChatConfig,
    messages: ConversationLog,
    preferences: Preferences,
    ids: MessageIdAllocator,
}

impl<S: KeyValueStore> ConversationStore<S> {
    /// Create an empty store without touching storage.
    #[must_use]
    pub fn new(storage: S, config: ChatConfig) -> Self {
        Self {
            storage,
            config,
            messages: Vec::new(),
            preferences: Preferences::default(),
            ids: MessageIdAllocator::default(),
        }
    }

    /// Create a store and load whatever the slots currently hold.
    #[must_use]
    pub fn open(storage: S, config: ChatConfig) -> Self {
        let mut store = Self::new(storage, config);
        store.load();
        store
    }

    /// Replace in-memory state with the persisted log and preferences.
    ///
    /// A corrupt or unreadable log becomes an empty log, a missing theme
    /// becomes light mode.
    pub fn load(&mut self) -> (ConversationLog, Preferences) {
        self.preferences = self.read_preferences();
        self.messages = self.read_log();
        for message in &self.messages {
            self.ids.observe(message.id);
        }

        info!(
            messages = self.messages.len(),
            dark_mode = self.preferences.dark_mode,
            "conversation loaded"
        );
        (self.messages.clone(), self.preferences)
    }

    /// Build a message carrying the next id and the current display time.
    pub fn create_message(&mut self, sender: Sender, content: impl Into<String>) -> Message {
        Message::new(self.ids.allocate(), sender, content)
    }

    /// Add a message at the end of the in-memory log.
    pub fn append(&mut self, message: Message) {
        self.ids.observe(message.id);
        debug!(id = %message.id, sender = %message.sender, "message appended");
        self.messages.push(message);
    }

    /// Write the capped log and the theme to storage.
    ///
    /// The returned status reflects the in-memory count, which may exceed the
    /// persisted count.
    pub fn persist(&self) -> MemoryStatus {
        if let Err(err) = self
            .storage
            .set(&self.config.theme_key, self.preferences.theme_value())
        {
            warn!("failed to save theme preference: {err}");
        }

        let kept = retain_recent(&self.messages, self.config.max_messages);
        match serde_json::to_string(kept) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(&self.config.storage_key, &raw) {
                    error!("failed to save messages: {err}");
                }
            }
            Err(err) => error!("failed to serialize messages: {err}"),
        }

        let status = self.memory_status();
        debug!(
            in_memory = self.messages.len(),
            persisted = kept.len(),
            %status,
            "conversation persisted"
        );
        status
    }

    /// Drop every message and the persisted log. Preferences are kept.
    ///
    /// Does nothing, storage included, when the log is already empty.
    pub fn clear(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        let dropped = self.messages.len();
        self.messages.clear();
        if let Err(err) = self.storage.remove(&self.config.storage_key) {
            error!("failed to remove saved messages: {err}");
        }
        info!(dropped, "conversation cleared");
    }

    /// Set the theme preference. Stored on the next [`Self::persist`].
    pub const fn set_dark_mode(&mut self, dark_mode: bool) {
        self.preferences.dark_mode = dark_mode;
    }

    /// Flip the theme preference and return the new value.
    pub const fn toggle_dark_mode(&mut self) -> bool {
        self.preferences.dark_mode = !self.preferences.dark_mode;
        self.preferences.dark_mode
    }

    /// In-memory log, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of in-memory messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the in-memory log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Current preferences.
    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Status of the in-memory log.
    #[must_use]
    pub fn memory_status(&self) -> MemoryStatus {
        MemoryStatus::from_count(self.messages.len())
    }

    /// Configuration the store was built with.
    #[must_use]
    pub const fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Underlying slot backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn read_preferences(&self) -> Preferences {
        match self.storage.get(&self.config.theme_key) {
            Ok(value) => Preferences::from_theme_value(value.as_deref()),
            Err(err) => {
                warn!("failed to read theme preference: {err}");
                Preferences::default()
            }
        }
    }

    fn read_log(&self) -> ConversationLog {
        let raw = match self.storage.get(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!("failed to read saved messages: {err}");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            error!("failed to parse saved messages: {err}");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::core::errors::ChatResult;
    use crate::chat::core::ids::MessageId;
    use crate::chat::storage::file_kv::FileKvStore;
    use crate::chat::storage::memory_kv::MemoryKvStore;

    fn config(max_messages: usize) -> ChatConfig {
        ChatConfig::default().with_max_messages(max_messages)
    }

    fn push(store: &mut ConversationStore<MemoryKvStore>, sender: Sender, text: &str) {
        let message = store.create_message(sender, text);
        store.append(message);
    }

    fn stored_log(kv: &MemoryKvStore) -> ChatResult<ConversationLog> {
        let raw = kv.get(crate::chat::core::DEFAULT_STORAGE_KEY)?.unwrap_or_default();
        Ok(serde_json::from_str(&raw)?)
    }

    #[test]
    fn test_persist_keeps_most_recent_within_cap() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(kv.clone(), config(5));
        for i in 0..12 {
            push(&mut store, Sender::User, &format!("message {i}"));
            store.persist();
            assert!(stored_log(&kv)?.len() <= 5);
        }

        let stored = stored_log(&kv)?;
        let contents: Vec<&str> = stored.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["message 7", "message 8", "message 9", "message 10", "message 11"]
        );
        assert_eq!(store.len(), 12);
        Ok(())
    }

    #[test]
    fn test_status_uses_in_memory_count() {
        let mut store = ConversationStore::open(MemoryKvStore::new(), config(10));
        for i in 0..25 {
            push(&mut store, Sender::User, &format!("m{i}"));
        }
        // Only 10 are stored, but 25 are held in memory.
        assert_eq!(store.persist(), MemoryStatus::Moderate);
    }

    #[test]
    fn test_persist_then_load_roundtrips() {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(kv.clone(), config(100));
        push(&mut store, Sender::User, "Hello there");
        push(&mut store, Sender::Assistant, "first line\nsecond line");
        store.persist();

        let (log, _) = ConversationStore::open(kv, config(100)).load();
        assert_eq!(log, store.messages());
    }

    #[test]
    fn test_clear_then_reload_is_empty() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(kv.clone(), config(100));
        push(&mut store, Sender::User, "hi");
        store.set_dark_mode(true);
        store.persist();

        store.clear();
        assert!(store.is_empty());
        assert_eq!(kv.get(crate::chat::core::DEFAULT_STORAGE_KEY)?, None);

        let reloaded = ConversationStore::open(kv, config(100));
        assert!(reloaded.is_empty());
        assert!(reloaded.preferences().dark_mode);
        Ok(())
    }

    #[test]
    fn test_clear_on_empty_log_leaves_storage_alone() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        kv.set(crate::chat::core::DEFAULT_STORAGE_KEY, "not json")?;
        let mut store = ConversationStore::open(kv.clone(), config(100));
        assert!(store.is_empty());

        store.clear();
        assert_eq!(
            kv.get(crate::chat::core::DEFAULT_STORAGE_KEY)?.as_deref(),
            Some("not json")
        );
        Ok(())
    }

    #[test]
    fn test_corrupt_log_loads_empty() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        kv.set(crate::chat::core::DEFAULT_STORAGE_KEY, "{\"id\": 1")?;
        kv.set(crate::chat::core::DEFAULT_THEME_KEY, "dark")?;

        let (log, preferences) = ConversationStore::new(kv, config(100)).load();
        assert!(log.is_empty());
        assert!(preferences.dark_mode);
        Ok(())
    }

    #[test]
    fn test_missing_slots_use_defaults() {
        let (log, preferences) = ConversationStore::new(MemoryKvStore::new(), config(100)).load();
        assert!(log.is_empty());
        assert_eq!(preferences, Preferences::default());
    }

    #[test]
    fn test_dark_mode_survives_reload() {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(kv.clone(), config(100));
        store.set_dark_mode(true);
        store.persist();

        let (_, preferences) = ConversationStore::new(kv, config(100)).load();
        assert!(preferences.dark_mode);
    }

    #[test]
    fn test_dark_mode_is_not_flushed_before_persist() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(kv.clone(), config(100));
        assert!(store.toggle_dark_mode());
        assert_eq!(kv.get(crate::chat::core::DEFAULT_THEME_KEY)?, None);

        store.persist();
        assert_eq!(
            kv.get(crate::chat::core::DEFAULT_THEME_KEY)?.as_deref(),
            Some("dark")
        );
        Ok(())
    }

    #[test]
    fn test_dark_mode_survives_lookalike_slot_names_on_disk() -> ChatResult<()> {
        let dir = tempfile::tempdir()?;
        let config = config(100).with_storage_key("neurachat.theme");
        assert!(config.validate().is_ok());

        let disk = FileKvStore::open(dir.path())?;
        let mut store = ConversationStore::open(disk.clone(), config.clone());
        store.set_dark_mode(true);
        let message = store.create_message(Sender::User, "hi");
        store.append(message);
        store.persist();

        assert_eq!(disk.get(&config.theme_key)?.as_deref(), Some("dark"));
        let reloaded = ConversationStore::open(disk, config);
        assert!(reloaded.preferences().dark_mode);
        assert_eq!(reloaded.len(), 1);
        Ok(())
    }

    #[test]
    fn test_store_over_borrowed_backend() {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(&kv, config(100));
        let message = store.create_message(Sender::User, "borrowed");
        store.append(message);
        store.persist();

        let saved = store.storage().get(crate::chat::core::DEFAULT_STORAGE_KEY);
        assert!(saved.is_ok_and(|raw| raw.is_some()));
        assert_eq!(kv.len(), 2);
    }

    #[test]
    fn test_ids_continue_after_reload() {
        let kv = MemoryKvStore::new();
        let mut store = ConversationStore::open(kv.clone(), config(100));
        push(&mut store, Sender::User, "a");
        push(&mut store, Sender::Assistant, "b");
        store.persist();

        let mut reloaded = ConversationStore::open(kv, config(100));
        let next = reloaded.create_message(Sender::User, "c");
        assert!(reloaded.messages().iter().all(|m| m.id < next.id));
    }

    #[test]
    fn test_ids_stay_unique_across_clear() {
        let mut store = ConversationStore::open(MemoryKvStore::new(), config(100));
        push(&mut store, Sender::User, "a");
        let before = store.messages()[0].id;
        store.clear();
        push(&mut store, Sender::User, "b");
        assert!(store.messages()[0].id > before);
    }

    #[test]
    fn test_append_accepts_foreign_ids() {
        let mut store = ConversationStore::open(MemoryKvStore::new(), config(100));
        store.append(Message::new(MessageId(1_700_000_000_000), Sender::User, "legacy"));
        let next = store.create_message(Sender::Assistant, "reply");
        assert_eq!(next.id, MessageId(1_700_000_000_001));
    }

    #[test]
    fn test_persist_survives_unwritable_storage() {
        struct ReadOnly;

        impl KeyValueStore for ReadOnly {
            fn get(&self, _key: &str) -> ChatResult<Option<String>> {
                Ok(None)
            }

            fn set(&self, key: &str, _value: &str) -> ChatResult<()> {
                Err(crate::chat::core::ChatError::Storage(format!("{key} is read-only")))
            }

            fn remove(&self, key: &str) -> ChatResult<()> {
                Err(crate::chat::core::ChatError::Storage(format!("{key} is read-only")))
            }
        }

        let mut store = ConversationStore::open(ReadOnly, config(100));
        let message = store.create_message(Sender::User, "hi");
        store.append(message);
        assert_eq!(store.persist(), MemoryStatus::Optimized);
        store.clear();
        assert!(store.is_empty());
    }
}
