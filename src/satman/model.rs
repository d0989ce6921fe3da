use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SCORE: f64 = 1600.0;
pub const PASS_THRESHOLD_FRACTION: f64 = 0.30;
pub const MAX_NAME_LEN: usize = 100;
pub const MIN_PINCODE_LEN: usize = 3;

/// Score a candidate has to strictly exceed to pass.
pub fn pass_threshold(max_score: f64) -> f64 {
    max_score * PASS_THRESHOLD_FRACTION
}

/// The only place `passed` is computed. Called after every change to either input.
pub fn derive_passed(sat_score: u32, max_score: f64) -> bool {
    f64::from(sat_score) > pass_threshold(max_score)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
    pub sat_score: u32,
    pub passed: bool,
}

/// Caller-supplied fields for a new record. Strings are expected trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCandidate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
    pub sat_score: i64,
}

impl NewCandidate {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        pincode: impl Into<String>,
        sat_score: i64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            city: city.into(),
            country: country.into(),
            pincode: pincode.into(),
            sat_score,
        }
    }
}

/// Before/after view of a score update, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreChange {
    pub name: String,
    pub old_score: u32,
    pub new_score: u32,
    pub old_passed: bool,
    pub new_passed: bool,
}

/// Result of changing the max score.
#[derive(Debug, Clone, PartialEq)]
pub struct Rescale {
    pub old_max: f64,
    pub new_max: f64,
    /// Names whose pass/fail status changed, in insertion order
    pub flipped: Vec<String>,
}
