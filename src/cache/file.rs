//! File Store Module
//!
//! Durable on-disk records, one file per cache key or per configured name.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use bincode::Options;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cache::{archive, CacheKey, RECORD_EXTENSION};
use crate::error::{CacheError, Result};

// == File Record ==
/// Serialized form of one file-tier entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord<T> {
    /// Full cache key the value was computed for
    pub key: String,
    /// When the record was written
    pub stored_at: DateTime<Utc>,
    /// The cached value
    pub value: T,
}

/// Decoding options matching `bincode::serialize_into`, bounded by the
/// record's size so a damaged length prefix fails instead of allocating.
fn decode_options(limit: u64) -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(limit)
}

// == File Store ==
/// On-disk cache rooted at a dedicated directory.
///
/// The directory is created lazily by the first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    // == Constructor ==
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // == Record Path ==
    /// Path of the record for `key`.
    ///
    /// A configured file name overrides the key-derived one, for saves and
    /// loads alike.
    pub fn record_path(&self, key: &CacheKey, file_name: Option<&str>) -> PathBuf {
        let stem = match file_name {
            Some(name) => name.to_string(),
            None => key.file_stem(),
        };
        self.dir.join(format!("{stem}.{RECORD_EXTENSION}"))
    }

    // == Load ==
    /// Loads the value stored for `key`.
    ///
    /// Returns None if the directory or file does not exist, or if the file
    /// holds a record for another key (several keys sharing one configured
    /// file name).
    /// A file that cannot be decoded is reported as `CacheError::Corrupted`.
    pub fn load<T: DeserializeOwned>(
        &self,
        key: &CacheKey,
        file_name: Option<&str>,
    ) -> Result<Option<T>> {
        if !self.dir.is_dir() {
            return Ok(None);
        }
        let path = self.record_path(key, file_name);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        let record: FileRecord<T> = decode_options(bytes.len() as u64)
            .deserialize(&bytes)
            .map_err(|source| CacheError::Corrupted {
                path: path.clone(),
                source,
            })?;

        if record.key != key.as_str() {
            debug!(
                "Record {} holds key {}, not {}",
                path.display(),
                record.key,
                key
            );
            return Ok(None);
        }

        info!("Restored cached value from file: {}", path.display());
        Ok(Some(record.value))
    }

    // == Save ==
    /// Writes `value` as the record for `key` and returns the record path.
    ///
    /// The record is written to a temporary sibling and renamed into place,
    /// so readers never observe a partial file.
    pub fn save<T: Serialize>(
        &self,
        key: &CacheKey,
        value: &T,
        file_name: Option<&str>,
    ) -> Result<PathBuf> {
        self.ensure_dir()?;

        let path = self.record_path(key, file_name);
        let tmp_path = path.with_extension(format!("{RECORD_EXTENSION}.tmp"));
        let record = FileRecord {
            key: key.as_str().to_string(),
            stored_at: Utc::now(),
            value,
        };

        let io_err = |source: std::io::Error| CacheError::Io {
            path: tmp_path.clone(),
            source,
        };

        {
            let mut writer = BufWriter::new(File::create(&tmp_path).map_err(io_err)?);
            bincode::serialize_into(&mut writer, &record).map_err(|source| {
                CacheError::Serialize {
                    path: path.clone(),
                    source,
                }
            })?;
            writer.flush().map_err(io_err)?;
        }

        fs::rename(&tmp_path, &path).map_err(|source| CacheError::Io {
            path: path.clone(),
            source,
        })?;

        info!("Saved cache record: {}", path.display());
        Ok(path)
    }

    // == Archive ==
    /// Writes a ZIP copy of a record next to it and returns the archive path.
    pub fn archive(&self, record: &Path) -> Result<PathBuf> {
        archive::archive_to_zip(record)
    }

    // == Discard ==
    /// Removes a record whose companion archive could not be written, so the
    /// next call recomputes and archives it again.
    pub fn discard(&self, record: &Path) {
        match fs::remove_file(record) {
            Ok(()) => info!("Discarded cache record: {}", record.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to discard cache record {}: {}", record.display(), e),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| CacheError::CacheDir {
            path: self.dir.clone(),
            source,
        })
    }
}
