//! Key-value persistence seam for the shift timer.
//!
//! The timer only needs string keys mapped to string values where presence
//! means "set". `MemoryStore` backs tests; the CLI uses
//! [`crate::db::kv::SqliteStore`].

use crate::errors::AppResult;
use std::collections::HashMap;
use std::sync::Mutex;

pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// `remove` that reports a failed write instead of swallowing it.
    fn try_remove(&self, key: &str) -> AppResult<()> {
        self.remove(key);
        Ok(())
    }

    /// `true` when the key holds exactly `"true"`.
    fn flag(&self, key: &str) -> bool {
        self.get(key).as_deref() == Some("true")
    }
}

/// In-process store, the equivalent of a fresh browser storage per instance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
