//! Cache Gateway
//!
//! Interception point applying the cache-aside protocol to every call of a
//! wrapped operation set.

use std::fmt::Display;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{generate_key, CacheStats, FileStore, MemoryStore};
use crate::config::Config;
use crate::error::CacheError;
use crate::models::{CacheTier, OperationRegistry};

/// Owns the operation registry and both storage tiers.
///
/// One instance per wrapped operation set; instances share nothing, so tests
/// can run several side by side over different cache directories.
#[derive(Debug)]
pub struct CacheGateway {
    registry: OperationRegistry,
    memory: MemoryStore,
    files: FileStore,
    stats: CacheStats,
}

impl CacheGateway {
    // == Constructor ==
    /// Creates a gateway whose file records live in `cache_dir`.
    pub fn new(registry: OperationRegistry, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            memory: MemoryStore::new(),
            files: FileStore::new(cache_dir),
            stats: CacheStats::new(),
        }
    }

    /// Creates a gateway from configuration.
    pub fn from_config(registry: OperationRegistry, config: &Config) -> Self {
        Self::new(registry, config.cache_dir.clone())
    }

    // == Call ==
    /// Runs `operation` through the cache.
    ///
    /// Operations without a policy always run `compute`. Otherwise the memory
    /// store is consulted first, then the file store for file-tier operations,
    /// and only a full miss runs `compute`. A successful result is stored in
    /// the policy's tier before being returned; an error from `compute` is
    /// returned unchanged and nothing is stored.
    ///
    /// # Arguments
    /// * `operation` - Name of a registered operation
    /// * `args` - Argument values, one per declared parameter
    /// * `compute` - The real operation
    pub fn call<T, E, F>(
        &mut self,
        operation: &str,
        args: &[&dyn Display],
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned + Clone + Send + 'static,
        E: From<CacheError>,
        F: FnOnce() -> Result<T, E>,
    {
        let descriptor = self.registry.resolve(operation)?;
        descriptor.check_arity(args.len())?;

        let Some(policy) = descriptor.policy() else {
            debug!("Pass-through call: {}", operation);
            self.stats.record_passthrough();
            return compute();
        };

        let key = generate_key(
            descriptor.name(),
            descriptor.params(),
            &policy.excluded_arg_types,
            args,
        );
        let file_name = policy.file_name_prefix.as_deref();

        // Memory first, whatever the tier
        if let Some(value) = self.memory.get::<T>(&key) {
            debug!("Memory hit: {}", key);
            self.stats.record_memory_hit();
            return Ok(value);
        }

        if policy.tier == CacheTier::File {
            if let Some(value) = self.files.load::<T>(&key, file_name)? {
                self.stats.record_file_hit();
                self.memory.put(key, value.clone());
                self.stats.set_memory_entries(self.memory.len());
                return Ok(value);
            }
        }

        debug!("Cache miss: {}", key);
        self.stats.record_miss();
        let result = compute()?;

        if policy.tier == CacheTier::File {
            let record = self.files.save(&key, &result, file_name)?;
            self.stats.record_file_write();
            if policy.should_archive() {
                // A record without its archive must not be served later
                if let Err(err) = self.files.archive(&record) {
                    self.files.discard(&record);
                    return Err(err.into());
                }
                self.stats.record_archive();
            }
        }

        self.memory.put(key, result.clone());
        self.stats.set_memory_entries(self.memory.len());
        Ok(result)
    }

    // == Accessors ==
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }

    /// Returns current gateway statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_memory_entries(self.memory.len());
        stats
    }
}
