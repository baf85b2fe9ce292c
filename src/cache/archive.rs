//! Archive Module
//!
//! Packs a single file-tier record into a companion ZIP container.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::cache::ARCHIVE_EXTENSION;
use crate::error::{CacheError, Result};

/// Path of the archive for `file`: the file's own path plus `.zip`.
pub fn archive_path(file: &Path) -> PathBuf {
    let mut path = OsString::from(file.as_os_str());
    path.push(".");
    path.push(ARCHIVE_EXTENSION);
    PathBuf::from(path)
}

// == Archive To Zip ==
/// Writes `<file>.zip` holding exactly one deflated entry named after `file`.
///
/// The archive is built in a temporary sibling and renamed into place; on
/// failure the temporary file is removed and no archive is left behind.
/// Returns the path of the written archive.
pub fn archive_to_zip(file: &Path) -> Result<PathBuf> {
    let zip_path = archive_path(file);
    let mut tmp_path = zip_path.clone().into_os_string();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let written = write_zip(file, &tmp_path).and_then(|()| {
        fs::rename(&tmp_path, &zip_path).map_err(|source| CacheError::Io {
            path: zip_path.clone(),
            source,
        })
    });
    if let Err(err) = written {
        // Best effort; the write error is what gets reported
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    info!("Archived cache record: {}", zip_path.display());
    Ok(zip_path)
}

fn write_zip(file: &Path, target_path: &Path) -> Result<()> {
    let entry_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let io_err = |path: &Path, source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    };
    let zip_err = |source: zip::result::ZipError| CacheError::Archive {
        path: file.to_path_buf(),
        source,
    };

    let mut source = BufReader::new(File::open(file).map_err(|e| io_err(file, e))?);
    let target = File::create(target_path).map_err(|e| io_err(target_path, e))?;

    let mut zip = ZipWriter::new(target);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(entry_name, options).map_err(zip_err)?;
    io::copy(&mut source, &mut zip).map_err(|e| io_err(target_path, e))?;
    zip.finish().map_err(zip_err)?;
    Ok(())
}
