use super::backend::StorageBackend;
use crate::error::{Result, SatError};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since satman is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    data: RefCell<Option<Vec<u8>>>,
    backup: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose data file already holds `bytes`.
    pub fn with_data(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::default();
        *backend.data.borrow_mut() = Some(bytes.into());
        backend
    }

    /// Enable write error simulation for testing rollback.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn data(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }

    pub fn backup(&self) -> Option<Vec<u8>> {
        self.backup.borrow().clone()
    }

    /// Number of successful data writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.data.borrow().clone())
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SatError::Store("Simulated write error".to_string()));
        }
        *self.data.borrow_mut() = Some(bytes.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn write_backup(&self, bytes: &[u8]) -> Result<PathBuf> {
        if self.simulate_write_error.get() {
            return Err(SatError::Store("Simulated write error".to_string()));
        }
        *self.backup.borrow_mut() = Some(bytes.to_vec());
        Ok(PathBuf::from("memory://sat_data.json.backup"))
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://sat_data.json")
    }
}
