//! Flat key-value store backed by one atomic JSON file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;

use super::atomic_json::{AtomicJsonError, AtomicJsonFile};

type Entries = BTreeMap<String, Value>;

/// A JSON object on disk, read and replaced whole on every access.
///
/// Values are untyped; callers decode their own key.
pub struct JsonKeyValueStore {
    file: AtomicJsonFile<Entries>,
}

impl JsonKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    pub fn get(&self, key: &str) -> Result<Option<Value>, AtomicJsonError> {
        Ok(self.file.load()?.and_then(|mut entries| entries.remove(key)))
    }

    /// Stores `value` under `key`, keeping the other keys.
    ///
    /// An unparsable file is replaced rather than blocking the write.
    pub fn set(&self, key: &str, value: Value) -> Result<(), AtomicJsonError> {
        if let Err(AtomicJsonError::JsonError(e)) = self.file.load() {
            tracing::warn!(
                "Replacing unparsable store {}: {}",
                self.file.path().display(),
                e
            );
            let mut entries = Entries::new();
            entries.insert(key.to_string(), value);
            return self.file.save(&entries);
        }

        self.file.update(Entries::new(), |entries| {
            entries.insert(key.to_string(), value);
            Ok(())
        })
    }
}
