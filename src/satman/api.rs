//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every satman operation, whatever the UI.
//!
//! `SatApi` owns the two pieces of state: the in-memory [`Roster`] and the
//! [`StorageBackend`] it is persisted to. Mutating calls go through commands
//! that persist before they report success and roll the roster back when the
//! save fails, so a returned error always means "nothing changed".
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `SatApi<FsBackend>`
//! - Testing: `SatApi<MemBackend>`
//!
//! The API does no formatting and no I/O of its own beyond the backend.

use crate::commands;
use crate::error::Result;
use crate::model::NewCandidate;
use crate::store::persist::{self, LoadEvent};
use crate::store::{Roster, StorageBackend};
use tracing::debug;

pub struct SatApi<B: StorageBackend> {
    roster: Roster,
    backend: B,
    load_event: LoadEvent,
}

impl<B: StorageBackend> SatApi<B> {
    /// Loads the roster from `backend`.
    ///
    /// Recovery from a corrupt file and dropped records are not errors; they
    /// come back as warnings in the returned `CmdResult`.
    pub fn open(backend: B, default_max_score: f64) -> Result<(Self, commands::CmdResult)> {
        let outcome = persist::load(&backend, default_max_score)?;
        let mut result = commands::CmdResult::default();

        if let LoadEvent::Recovered { backup, reason } = &outcome.event {
            result.add_message(commands::CmdMessage::warning(format!(
                "Could not read {} ({}). A copy was saved to {} and an empty store was started.",
                backend.location().display(),
                reason,
                backup.display()
            )));
        }
        for warning in &outcome.warnings {
            result.add_message(commands::CmdMessage::warning(warning.clone()));
        }

        if outcome.needs_write_back() {
            match persist::save(&backend, &outcome.roster) {
                Ok(()) => debug!(
                    repaired = outcome.repaired.len(),
                    "wrote recomputed pass/fail flags back"
                ),
                Err(e) => result.add_message(commands::CmdMessage::error(format!(
                    "Could not save the recomputed pass/fail statuses: {}",
                    e
                ))),
            }
        }

        let api = Self {
            roster: outcome.roster,
            backend,
            load_event: outcome.event,
        };
        Ok((api, result))
    }

    pub fn insert(&mut self, candidate: NewCandidate) -> Result<commands::CmdResult> {
        commands::insert::run(&mut self.roster, &self.backend, candidate)
    }

    pub fn show(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.roster, name)
    }

    pub fn list(&self, filter: commands::StatusFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster, filter)
    }

    pub fn rank(&self, name: &str) -> Result<commands::CmdResult> {
        commands::rank::run(&self.roster, name)
    }

    pub fn update_score(&mut self, name: &str, new_score: i64) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.roster, &self.backend, name, new_score)
    }

    pub fn delete(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.roster, &self.backend, name)
    }

    pub fn stats(&self) -> commands::CmdResult {
        commands::stats::run(&self.roster)
    }

    pub fn max_score(&self) -> commands::CmdResult {
        commands::max_score::show(&self.roster)
    }

    pub fn set_max_score(&mut self, new_max: f64) -> Result<commands::CmdResult> {
        commands::max_score::run(&mut self.roster, &self.backend, new_max)
    }

    pub fn save(&self) -> Result<commands::CmdResult> {
        commands::save::run(&self.roster, &self.backend)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// How the roster was obtained when the API was opened.
    pub fn load_event(&self) -> &LoadEvent {
        &self.load_event
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StatusFilter};
