//! Key-value slot abstraction the conversation store writes through.

use crate::chat::core::errors::ChatResult;

/// Text slots addressed by key.
pub trait KeyValueStore {
    /// Read a slot. A missing slot is `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> ChatResult<Option<String>>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> ChatResult<()>;

    /// Delete a slot. Removing a missing slot succeeds.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> ChatResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> ChatResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ChatResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ChatResult<()> {
        (**self).remove(key)
    }
}
