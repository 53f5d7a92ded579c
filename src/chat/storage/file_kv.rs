//! File-per-key backend rooted in a data directory.
//!
//! Writes go through a sibling `.tmp` file and a rename, so a crash mid-write
//! leaves either the old value or the new one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::chat::core::errors::{ChatError, ChatResult};
use crate::chat::storage::kv_store::KeyValueStore;

const SLOT_EXTENSION: &str = "slot";

/// Slots stored as files under one directory.
#[derive(Clone, Debug)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Open (and create if needed) the data directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> ChatResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!("file slots rooted at {}", root.display());
        Ok(Self { root })
    }

    /// Directory holding the slot files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> ChatResult<PathBuf> {
        if key.trim().is_empty() {
            return Err(ChatError::Storage(format!("unusable slot key {key:?}")));
        }
        Ok(self.root.join(format!("{}.{SLOT_EXTENSION}", file_stem(key))))
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Map a slot key onto a portable file stem, one-to-one.
///
/// Lowercase ASCII letters, digits and `-` pass through. Every other byte,
/// `_` and uppercase letters included, becomes `_` followed by two uppercase
/// hex digits, so distinct keys stay distinct on case-insensitive filesystems.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push('_');
            stem.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            stem.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
        }
    }
    stem
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> ChatResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> ChatResult<()> {
        let path = self.slot_path(key)?;
        let tmp = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> ChatResult<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
