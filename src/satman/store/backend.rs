use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw data-file I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `persist` handles the "what" (format, validation, recovery).
pub trait StorageBackend {
    /// Read the raw data file.
    /// Returns Ok(None) if it does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the data file with `bytes`.
    /// MUST be atomic: on error the previous content is left untouched.
    fn write_atomic(&self, bytes: &[u8]) -> Result<()>;

    /// Keep a verbatim copy of an unreadable data file and return where it went.
    fn write_backup(&self, bytes: &[u8]) -> Result<PathBuf>;

    /// Where the data lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
