//! In-process key-value backend.

use std::sync::Arc;

use dashmap::DashMap;

use crate::chat::core::errors::ChatResult;
use crate::chat::storage::kv_store::KeyValueStore;

/// Shared in-memory slots.
///
/// Clones share the same map, so a test can keep a handle while a store owns
/// another one and observe exactly what was written.
#[derive(Clone, Debug, Default)]
pub struct MemoryKvStore {
    slots: Arc<DashMap<String, String>>,
}

impl MemoryKvStore {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> ChatResult<Option<String>> {
        Ok(self.slots.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> ChatResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ChatResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        assert_eq!(kv.get("a")?, None);

        kv.set("a", "1")?;
        kv.set("a", "2")?;
        assert_eq!(kv.get("a")?.as_deref(), Some("2"));
        assert_eq!(kv.len(), 1);

        kv.remove("a")?;
        kv.remove("a")?;
        assert!(kv.is_empty());
        Ok(())
    }

    #[test]
    fn test_clones_share_slots() -> ChatResult<()> {
        let kv = MemoryKvStore::new();
        let handle = kv.clone();
        kv.set("theme", "dark")?;
        assert_eq!(handle.get("theme")?.as_deref(), Some("dark"));
        Ok(())
    }
}
