//! In-memory storage for tests and for callers that post-process the bytes
//!
//! Can be configured to fail every operation on chosen paths, to exercise I/O error
//! propagation without touching a real filesystem.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use super::Storage;

/// Storage keeping every file as a byte vector keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: BTreeMap<PathBuf, Vec<u8>>,
    failing: HashSet<PathBuf>,
    /// Number of append calls, across all paths.
    appends: usize,
}

impl MemoryStorage {
    /// Create a new empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds a file
    pub fn with_file(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        let mut storage = Self::new();
        storage.files.insert(path.into(), bytes.into());
        storage
    }

    /// Make every subsequent operation on `path` fail.
    pub fn fail_on(&mut self, path: impl Into<PathBuf>) {
        self.failing.insert(path.into());
    }

    /// Stop failing operations on `path`.
    pub fn recover(&mut self, path: &Path) {
        self.failing.remove(path);
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(|b| b.as_slice())
    }

    /// File content as UTF-8, if the file exists.
    pub fn get_string(&self, path: &Path) -> Option<String> {
        self.get(path).map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.keys().cloned().collect()
    }

    pub fn append_count(&self) -> usize {
        self.appends
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("simulated failure for {}", path.display()),
            ));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn append(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.check(path)?;
        self.appends += 1;
        self.files.entry(path.to_path_buf()).or_default().extend_from_slice(bytes);
        Ok(())
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.check(path)?;
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, path: &Path) -> io::Result<()> {
        self.check(path)?;
        self.files.remove(path);
        Ok(())
    }
}
