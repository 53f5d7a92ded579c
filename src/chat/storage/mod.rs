//! Key-value storage backends for persisted chat state.

pub mod file_kv;
pub mod kv_store;
pub mod memory_kv;

pub use file_kv::FileKvStore;
pub use kv_store::KeyValueStore;
pub use memory_kv::MemoryKvStore;
