//! Header-rowed CSV file primitives.
//!
//! # Responsibility
//! - Decode/encode typed rows against a fixed header row.
//! - Replace a file's full contents via staged-write-then-rename.
//!
//! # Invariants
//! - Rows are written with an explicit header record; serde-derived headers
//!   are disabled so the persisted column names stay pinned in one place.
//! - The staged file lives in the destination directory, so the final rename
//!   never crosses a filesystem boundary.

use super::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;

/// Creates `path` with only its header row when the file does not exist.
pub fn ensure_file(path: &Path, header: &[&str]) -> StoreResult<()> {
    if path.exists() {
        return Ok(());
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| StoreError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    writer
        .write_record(header)
        .and_then(|()| writer.flush().map_err(csv::Error::from))
        .map_err(|source| StoreError::Create {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads every row of `path` into typed records.
///
/// Any undecodable row fails the whole read; callers never observe a
/// partially-loaded resource.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(rows)
}

/// Replaces the contents of `path` with the given rows atomically.
pub fn replace_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> StoreResult<()> {
    replace_file(path, header, |writer| {
        for row in rows {
            writer.serialize(row).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    })
}

/// Rewrites `path` through a staged temp file and an atomic rename.
///
/// `fill` receives a writer positioned after the header row. When it (or any
/// later step) fails, the staged file is discarded and the original remains
/// untouched; the on-disk state is never observable partially written.
pub fn replace_file<F>(path: &Path, header: &[&str], fill: F) -> StoreResult<()>
where
    F: FnOnce(&mut csv::Writer<&mut File>) -> StoreResult<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|source| StoreError::Replace {
        path: path.to_path_buf(),
        source,
    })?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(staged.as_file_mut());
        writer
            .write_record(header)
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        fill(&mut writer)?;
        writer
            .flush()
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source: source.into(),
            })?;
    }

    staged
        .persist(path)
        .map(|_| ())
        .map_err(|err| StoreError::Replace {
            path: path.to_path_buf(),
            source: err.error,
        })
}
