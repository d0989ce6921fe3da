//! # Satman Architecture
//!
//! Satman keeps candidate SAT results in a single JSON file and answers the
//! questions people ask about them: who passed, where does a candidate rank,
//! what is the average. It is a **library that happens to have a CLI**.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, confirms deletes, formats output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the roster and the storage backend                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Mutations commit through a save, or roll back            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Statistics (stats.rs)             │
//! │  - Roster: in-memory records, CRUD, pass/fail derivation    │
//! │  - persist: atomic save, corrupt-file recovery on load      │
//! │  - stats: rank, percentile, averages, pass rate             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pass/Fail
//!
//! A candidate passes when their score is strictly above 30% of the store's
//! max score. The flag is derived by [`model::derive_passed`] after every
//! change to a score or to the max score, and is never edited directly.
//!
//! ## Commit and Rollback
//!
//! A mutation is applied to the roster, then the whole roster is saved. If the
//! save fails the roster is restored to its previous state and the error is
//! returned, so the file on disk and the roster in memory never disagree about
//! what was committed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Roster, persistence and storage backends
//! - [`stats`]: Ranking and aggregate statistics
//! - [`model`]: `Candidate` and the pass rule
//! - [`validation`]: Field rules
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod store;
pub mod validation;
