//! Loading and saving the roster.
//!
//! ## Save
//!
//! 1. Serialize the whole roster (`max_score` plus every record, in order)
//! 2. Hand the bytes to [`StorageBackend::write_atomic`], which stages them
//!    beside the data file and renames over it only once fully written
//! 3. Any failure is returned untouched; the previous file survives and the
//!    caller decides what to do with its in-memory change
//!
//! ## Load
//!
//! 1. No data file: fresh roster with the configured default max score
//! 2. Unparseable file, or one with the wrong shape: the bytes are copied to
//!    the backup location and a fresh roster is used ([`LoadEvent::Recovered`])
//! 3. Otherwise every record is checked against the field rules relative to
//!    the stored max score. Bad records are dropped with a warning; a stale
//!    `passed` flag is re-derived and reported. When flags were the only
//!    problem, [`LoadOutcome::needs_write_back`] tells the caller to save
//!
//! A file that can't be backed up is never discarded: load fails instead.

use super::backend::StorageBackend;
use super::roster::Roster;
use crate::error::Result;
use crate::model::{derive_passed, Candidate};
use crate::validation::{validate_max_score, validate_name, validate_pincode, validate_score};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    /// No data file existed
    Fresh,
    /// The data file was read
    Loaded,
    /// The data file was unreadable and has been set aside
    Recovered { backup: PathBuf, reason: String },
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub roster: Roster,
    pub event: LoadEvent,
    /// One entry per dropped or repaired record
    pub warnings: Vec<String>,
    /// Records whose `passed` flag was recomputed
    pub repaired: Vec<String>,
    /// Records left out because they broke a field rule
    pub dropped: Vec<String>,
}

impl LoadOutcome {
    /// True when the roster differs from the file only by recomputed flags,
    /// so writing it back loses nothing.
    pub fn needs_write_back(&self) -> bool {
        !self.repaired.is_empty() && self.dropped.is_empty()
    }
}

#[derive(Serialize)]
struct StoredFileRef<'a> {
    max_score: f64,
    records: RecordsRef<'a>,
}

struct RecordsRef<'a>(&'a [Candidate]);

impl Serialize for RecordsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|c| (&c.name, c)))
    }
}

#[derive(Deserialize)]
struct StoredFile {
    max_score: f64,
    records: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct StoredRecord {
    name: String,
    address: String,
    city: String,
    country: String,
    pincode: String,
    // Older files hold scores as floats (1350.0)
    sat_score: f64,
    passed: bool,
}

/// Pretty-printed JSON document for the roster.
pub fn to_json(roster: &Roster) -> Result<String> {
    let doc = StoredFileRef {
        max_score: roster.max_score(),
        records: RecordsRef(roster.list_all()),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn save<B: StorageBackend>(backend: &B, roster: &Roster) -> Result<()> {
    let json = to_json(roster)?;
    backend.write_atomic(json.as_bytes())?;
    debug!(
        path = %backend.location().display(),
        records = roster.len(),
        "saved roster"
    );
    Ok(())
}

pub fn load<B: StorageBackend>(backend: &B, default_max_score: f64) -> Result<LoadOutcome> {
    let bytes = match backend.read()? {
        Some(bytes) => bytes,
        None => {
            info!(path = %backend.location().display(), "no data file, starting empty");
            return Ok(LoadOutcome {
                roster: Roster::new(default_max_score)?,
                event: LoadEvent::Fresh,
                warnings: Vec::new(),
                repaired: Vec::new(),
                dropped: Vec::new(),
            });
        }
    };

    let (max_score, records) = match parse(&bytes) {
        Ok(parsed) => parsed,
        Err(reason) => {
            let backup = backend.write_backup(&bytes)?;
            warn!(
                path = %backend.location().display(),
                backup = %backup.display(),
                %reason,
                "data file unreadable, moved aside"
            );
            return Ok(LoadOutcome {
                roster: Roster::new(default_max_score)?,
                event: LoadEvent::Recovered { backup, reason },
                warnings: Vec::new(),
                repaired: Vec::new(),
                dropped: Vec::new(),
            });
        }
    };

    let mut roster = Roster::new(max_score)?;
    let mut warnings = Vec::new();
    let mut repaired = Vec::new();
    let mut dropped = Vec::new();
    for (key, record) in records {
        match admit(&key, record, max_score) {
            Ok((candidate, stale)) => {
                if stale {
                    warnings.push(format!(
                        "Pass/fail status for '{}' was out of date and has been recomputed",
                        key
                    ));
                    repaired.push(key);
                }
                roster.push(candidate);
            }
            Err(reason) => {
                warnings.push(format!("Dropped record '{}': {}", key, reason));
                dropped.push(key);
            }
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    info!(
        path = %backend.location().display(),
        records = roster.len(),
        "loaded roster"
    );

    Ok(LoadOutcome {
        roster,
        event: LoadEvent::Loaded,
        warnings,
        repaired,
        dropped,
    })
}

/// Shape check. Any error here sends the whole file to the backup.
fn parse(bytes: &[u8]) -> std::result::Result<(f64, Vec<(String, StoredRecord)>), String> {
    let file: StoredFile = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    validate_max_score(file.max_score).map_err(|e| e.to_string())?;

    let mut records = Vec::with_capacity(file.records.len());
    for (key, value) in file.records {
        let record: StoredRecord = serde_json::from_value(value)
            .map_err(|e| format!("record '{}': {}", key, e))?;
        records.push((key, record));
    }
    Ok((file.max_score, records))
}

/// Field check for one well-formed record. Returns whether `passed` had to be fixed.
fn admit(
    key: &str,
    record: StoredRecord,
    max_score: f64,
) -> std::result::Result<(Candidate, bool), String> {
    validate_name(&record.name).map_err(|e| e.to_string())?;
    if record.name != key {
        return Err(format!("stored under a different name ('{}')", record.name));
    }
    validate_pincode(&record.pincode).map_err(|e| e.to_string())?;
    if record.sat_score.fract() != 0.0 {
        return Err(format!("score {} is not a whole number", record.sat_score));
    }
    let sat_score =
        validate_score(record.sat_score as i64, max_score).map_err(|e| e.to_string())?;

    let passed = derive_passed(sat_score, max_score);
    let candidate = Candidate {
        name: record.name,
        address: record.address,
        city: record.city,
        country: record.country,
        pincode: record.pincode,
        sat_score,
        passed,
    };
    Ok((candidate, passed != record.passed))
}
