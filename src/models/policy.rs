//! Cache policy attached to an operation declaration
//!
//! Decides which tier backs an operation and how its records are named.

use std::collections::BTreeSet;

use crate::cache::ParamType;

/// Storage tier backing an operation's results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheTier {
    /// Process-lifetime memory store only
    #[default]
    InMemory,
    /// Durable file records, with the memory store in front
    File,
}

/// Per-operation caching configuration.
///
/// # Fields
/// - `tier`: which store backs the operation
/// - `excluded_arg_types`: parameter types ignored by key derivation
/// - `file_name_prefix`: fixed record name, overriding key-derived naming
/// - `archive_to_zip`: also write a ZIP copy of each file record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachePolicy {
    pub tier: CacheTier,
    pub excluded_arg_types: BTreeSet<ParamType>,
    pub file_name_prefix: Option<String>,
    pub archive_to_zip: bool,
}

impl CachePolicy {
    /// Policy backed by the memory store.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Policy backed by file records.
    pub fn file() -> Self {
        Self {
            tier: CacheTier::File,
            ..Self::default()
        }
    }

    /// Leaves arguments declared as `T` out of the cache key.
    pub fn exclude<T: ?Sized>(self) -> Self {
        self.exclude_type(ParamType::of::<T>())
    }

    pub fn exclude_type(mut self, param: ParamType) -> Self {
        self.excluded_arg_types.insert(param);
        self
    }

    /// Names the backing file `<prefix>.txt` for every key of the operation.
    pub fn with_file_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_name_prefix = Some(prefix.into()).filter(|p: &String| !p.is_empty());
        self
    }

    /// Requests a ZIP copy of every written record.
    pub fn archived(mut self) -> Self {
        self.archive_to_zip = true;
        self
    }

    /// True when a ZIP copy must be written; only file-tier policies archive.
    pub fn should_archive(&self) -> bool {
        self.tier == CacheTier::File && self.archive_to_zip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_in_memory() {
        let policy = CachePolicy::in_memory();
        assert_eq!(policy.tier, CacheTier::InMemory);
        assert!(policy.excluded_arg_types.is_empty());
        assert!(policy.file_name_prefix.is_none());
        assert!(!policy.archive_to_zip);
    }

    #[test]
    fn test_file_policy_builder() {
        let policy = CachePolicy::file()
            .archived()
            .with_file_name_prefix("factorials")
            .exclude::<String>();

        assert_eq!(policy.tier, CacheTier::File);
        assert!(policy.should_archive());
        assert_eq!(policy.file_name_prefix.as_deref(), Some("factorials"));
        assert!(policy.excluded_arg_types.contains(&ParamType::of::<String>()));
    }

    #[test]
    fn test_empty_prefix_means_key_naming() {
        let policy = CachePolicy::file().with_file_name_prefix("");
        assert!(policy.file_name_prefix.is_none());
    }

    #[test]
    fn test_in_memory_policy_never_archives() {
        let policy = CachePolicy::in_memory().archived();
        assert!(!policy.should_archive());
    }
}
