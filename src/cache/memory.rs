//! Memory Store Module
//!
//! Process-lifetime mapping from cache key to a live cached value.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::cache::CacheKey;

// == Memory Store ==
/// In-process key-value storage owned by a single gateway.
///
/// Values of any type are held behind `Any`; each key belongs to exactly one
/// operation, so a key is always read back with the type it was written with.
/// Entries are write-once and never evicted.
#[derive(Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<CacheKey, Box<dyn Any + Send>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Returns None if the key is absent or holds a value of another type.
    pub fn get<T: Clone + 'static>(&self, key: &CacheKey) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    // == Put ==
    /// Stores `value` under `key` unless the key is already present.
    ///
    /// Returns true if the value was inserted.
    pub fn put<T: Send + 'static>(&mut self, key: CacheKey, value: T) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, Box::new(value));
        true
    }

    // == Contains ==
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
