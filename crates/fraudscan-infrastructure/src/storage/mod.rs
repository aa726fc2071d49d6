//! Storage layer for file-backed persistence.
//!
//! - `atomic_json`: whole-file JSON replacement with temp file + rename
//! - `kv_store`: flat key-value object on top of `atomic_json`

pub mod atomic_json;
pub mod kv_store;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use kv_store::JsonKeyValueStore;
