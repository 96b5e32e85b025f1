// src/store.rs
//
// `.store`: local cache dir (player index, debug log), plus the in-memory
// projection cache the viewers read through.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::consts::STORE_DIR;
use crate::config::options::Category;
use crate::csv::read_table;
use crate::error::{Error, Result};
use crate::records::ProjectionRecord;

pub fn store_dir() -> PathBuf {
    PathBuf::from(STORE_DIR)
}

pub fn store_path(file: &str) -> PathBuf {
    store_dir().join(file)
}

/* ---------------- Projection cache ---------------- */

/// Identity of a file on disk. Any change in size or mtime is a new key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileKey {
    pub fn of(path: &Path) -> Result<FileKey> {
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let meta = fs::metadata(path)?;
        Ok(FileKey {
            path: path.to_path_buf(),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// Parsed projection files, reused until the file changes or the entry is
/// invalidated. Owned by the caller; nothing global.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    entries: HashMap<PathBuf, (FileKey, Vec<ProjectionRecord>)>,
    hits: usize,
    misses: usize,
}

impl ProjectionCache {
    pub fn new() -> Self { Self::default() }

    /// Cached rows for `path`, reloading when the file has changed.
    /// `delim` is the file's delimiter; `fallback` fills a missing category column.
    pub fn get_or_load(&mut self, path: &Path, delim: u8, fallback: Category) -> Result<&[ProjectionRecord]> {
        let key = FileKey::of(path)?;
        let fresh = matches!(self.entries.get(path), Some((k, _)) if *k == key);

        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            let t = read_table(path, delim)?;
            let rows = ProjectionRecord::from_table(&t, fallback)?;
            logd!("Cache: loaded {} ({} rows)", path.display(), rows.len());
            self.entries.insert(path.to_path_buf(), (key, rows));
        }

        Ok(self.entries.get(path).map(|(_, rows)| rows.as_slice()).unwrap_or(&[]))
    }

    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (usize, usize) { (self.hits, self.misses) }
}
