//! Cache Module
//!
//! Key derivation plus the two storage tiers: an in-memory map and on-disk records.

mod archive;
mod file;
mod key;
mod memory;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use archive::{archive_path, archive_to_zip};
pub use file::{FileRecord, FileStore};
pub use key::{generate_key, CacheKey, ParamType, KEY_SEPARATOR};
pub use memory::MemoryStore;
pub use stats::CacheStats;

// == Public Constants ==
/// Extension of file-tier records
pub const RECORD_EXTENSION: &str = "txt";

/// Extension appended to a record's name for its archive
pub const ARCHIVE_EXTENSION: &str = "zip";
