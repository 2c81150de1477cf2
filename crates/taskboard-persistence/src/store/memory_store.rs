use crate::traits::KeyValueStore;
use parking_lot::Mutex;
use std::collections::HashMap;
use taskboard_core::{TaskboardError, TaskboardResult};

/// In-memory key-value store with an optional size quota.
///
/// The quota counts the bytes of all keys and values; a `set` that would
/// exceed it fails and leaves the store untouched.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn used_bytes(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TaskboardResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TaskboardResult<()> {
        let mut entries = self.entries.lock();
        if let Some(quota) = self.quota {
            let replaced = entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = Self::used_bytes(&entries) - replaced + key.len() + value.len();
            if needed > quota {
                return Err(TaskboardError::Storage(format!(
                    "quota exceeded: {} of {} bytes",
                    needed, quota
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TaskboardResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
