//! Storage capability used by the writers to persist serialized documents.
//!
//! Every call is an independent operation on a named path: nothing keeps a file handle
//! open between flush points.

mod local;
mod memory;

use std::io;
use std::path::Path;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Byte sink addressed by path.
pub trait Storage {
    /// Appends bytes to the file at `path`, creating it when missing.
    fn append(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Replaces the content of the file at `path` with `bytes`.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Deletes the file at `path`. A missing file is not an error.
    fn remove(&mut self, path: &Path) -> io::Result<()>;
}
