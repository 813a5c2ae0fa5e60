use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::Storage;

/// Storage backed by the local filesystem.
///
/// Missing parent directories are created on the first write to a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

impl Storage for LocalStorage {
    fn append(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        ensure_parent(path)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(bytes)?;
        file.flush()
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        ensure_parent(path)?;
        fs::write(path, bytes)
    }

    fn remove(&mut self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
