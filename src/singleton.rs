//! A process-wide registry: built on first access, one instance for the
//! life of the process, no other way in.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

pub struct Registry {
    entries: Mutex<HashMap<String, String>>,
}

impl Registry {
    /// The only access path. The registry is constructed lazily on the
    /// first call; every later call sees the same instance, including
    /// racing first calls from other threads.
    pub fn instance() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Registry {
            entries: Mutex::new(HashMap::new()),
        })
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock_entries().insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock_entries().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    // A poisoned map of strings is still a map of strings.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
