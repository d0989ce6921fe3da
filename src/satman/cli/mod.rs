//! # CLI Behavior
//!
//! This is **one possible UI client** for satman, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, prompts
//! and output formatting.
//!
//! ## Data Location
//!
//! 1. `--data <FILE>` uses that file directly
//! 2. Otherwise the data directory is `$SATMAN_HOME`, falling back to the
//!    platform data dir, and the file name comes from its `config.json`
//!
//! ## Naked Execution (`satman`)
//!
//! Running `satman` with no arguments lists every candidate.
//!
//! ## Deleting
//!
//! `satman delete <name>` shows the record and asks for `DELETE <name>` to be
//! typed back before anything is removed. `--yes` skips the prompt.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup and per-command handlers
//! - `render.rs`: text and JSON output

mod commands;
mod render;
mod setup;

pub use commands::{error_hint, run};
