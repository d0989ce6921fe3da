//! # Storage Layer
//!
//! The store is split the same way reads and writes are:
//!
//! - [`roster::Roster`]: the in-memory record store. All CRUD and pass/fail
//!   derivation happens here, with no knowledge of disk.
//! - [`persist`]: the save and load state machines (atomic save, corrupted
//!   file recovery, per-record validation on load).
//! - [`backend::StorageBackend`]: raw byte I/O for the data file.
//!
//! ## Backends
//!
//! - [`fs_backend::FsBackend`]: production, one JSON file on disk
//!   - Writes are staged to `.<file>-<uuid>.tmp` and renamed into place
//!   - Unreadable files are copied to `<file>.backup`
//!
//! - [`mem_backend::MemBackend`]: in-memory, for tests
//!   - Can simulate write errors to exercise rollback
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "max_score": 1600.0,
//!   "records": {
//!     "Alice": { "name": "Alice", "address": "...", "city": "...",
//!                "country": "...", "pincode": "02101",
//!                "sat_score": 1350, "passed": true }
//!   }
//! }
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod persist;
pub mod roster;

pub use backend::StorageBackend;
pub use roster::Roster;
