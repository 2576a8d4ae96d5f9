//! In-memory backend with an optional byte quota.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::KeyValueBackend;
use crate::error::{CardError, CardResult};

/// HashMap-backed store. Mirrors local storage's quota behavior when built
/// with [`MemoryBackend::with_quota`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once keys plus values exceed `bytes`.
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

    fn used_without(entries: &HashMap<String, String>, skip: &str) -> usize {
        entries
            .iter()
            .filter(|(k, _)| k.as_str() != skip)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> CardResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CardResult<()> {
        let mut entries = self.entries.lock();
        if let Some(quota) = self.quota {
            let needed = Self::used_without(&entries, key) + key.len() + value.len();
            if needed > quota {
                return Err(CardError::StorageWrite(format!(
                    "quota exceeded: {} of {} bytes",
                    needed, quota
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
