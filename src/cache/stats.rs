//! Cache Statistics Module
//!
//! Tracks gateway activity: hits per tier, misses, pass-through calls and writes.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Calls served from the memory store
    pub memory_hits: u64,
    /// Calls served from a file record
    pub file_hits: u64,
    /// Cached calls that had to run the real operation
    pub misses: u64,
    /// Calls to operations without a cache policy
    pub passthrough: u64,
    /// File records written
    pub file_writes: u64,
    /// ZIP archives written
    pub archives: u64,
    /// Current number of entries in the memory store
    pub memory_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate over cached calls.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no cached call has been made.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.memory_hits + self.file_hits;
        let total = hits + self.misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    pub fn record_memory_hit(&mut self) {
        self.memory_hits += 1;
    }

    pub fn record_file_hit(&mut self) {
        self.file_hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_passthrough(&mut self) {
        self.passthrough += 1;
    }

    pub fn record_file_write(&mut self) {
        self.file_writes += 1;
    }

    pub fn record_archive(&mut self) {
        self.archives += 1;
    }

    // == Update Entry Count ==
    pub fn set_memory_entries(&mut self, count: usize) {
        self.memory_entries = count;
    }
}
