//! Field validation for candidate records.
//!
//! The same rules gate inserts, score updates, rescaling and records read
//! back from disk:
//! - Names are non-empty and at most [`MAX_NAME_LEN`] characters
//! - Pincodes are ASCII digits only, at least [`MIN_PINCODE_LEN`] long
//! - Scores are integers in `0..=max_score`
//! - The max score is a finite, positive number

use crate::model::{MAX_NAME_LEN, MIN_PINCODE_LEN};

/// Validates a candidate name.
///
/// # Examples
/// ```
/// use satman::validation::validate_name;
///
/// assert!(validate_name("Alice").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("   ").is_err());
/// assert!(validate_name(&"x".repeat(101)).is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(len));
    }

    Ok(())
}

/// Validates a pincode: digits only, at least three of them.
///
/// # Examples
/// ```
/// use satman::validation::validate_pincode;
///
/// assert!(validate_pincode("02101").is_ok());
/// assert!(validate_pincode("12").is_err());
/// assert!(validate_pincode("12a45").is_err());
/// ```
pub fn validate_pincode(pincode: &str) -> Result<(), ValidationError> {
    if pincode.len() < MIN_PINCODE_LEN || !pincode.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPincode(pincode.to_string()));
    }
    Ok(())
}

/// Range-checks a score against the current max score and narrows it.
pub fn validate_score(score: i64, max_score: f64) -> Result<u32, ValidationError> {
    let out_of_range = ValidationError::ScoreOutOfRange { score, max_score };
    if score < 0 || score as f64 > max_score {
        return Err(out_of_range);
    }
    u32::try_from(score).map_err(|_| out_of_range)
}

/// Scores are stored as `u32`, so no max score may exceed what a record can hold.
pub const MAX_SCORE_CEILING: f64 = u32::MAX as f64;

/// Checks a max score: finite, positive and at most [`MAX_SCORE_CEILING`].
///
/// # Examples
/// ```
/// use satman::validation::validate_max_score;
///
/// assert!(validate_max_score(1600.0).is_ok());
/// assert!(validate_max_score(0.0).is_err());
/// assert!(validate_max_score(1e10).is_err());
/// ```
pub fn validate_max_score(max_score: f64) -> Result<(), ValidationError> {
    if !max_score.is_finite() || max_score <= 0.0 || max_score > MAX_SCORE_CEILING {
        return Err(ValidationError::InvalidMaxScore(max_score));
    }
    Ok(())
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is empty or whitespace
    EmptyName,
    /// Name exceeds the length limit (carries the actual length)
    NameTooLong(usize),
    /// Pincode is too short or has non-digit characters
    InvalidPincode(String),
    /// Score is negative or above the max score
    ScoreOutOfRange { score: i64, max_score: f64 },
    /// Max score is zero, negative or not a number
    InvalidMaxScore(f64),
    /// Max score would leave a stored score above it
    MaxScoreBelowScores { max_score: f64, highest: u32 },
}

impl ValidationError {
    /// The record field the failure applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName | ValidationError::NameTooLong(_) => "name",
            ValidationError::InvalidPincode(_) => "pincode",
            ValidationError::ScoreOutOfRange { .. } => "sat_score",
            ValidationError::InvalidMaxScore(_) | ValidationError::MaxScoreBelowScores { .. } => {
                "max_score"
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "name: cannot be empty"),
            ValidationError::NameTooLong(len) => write!(
                f,
                "name: {} characters is over the {} character limit",
                len, MAX_NAME_LEN
            ),
            ValidationError::InvalidPincode(pincode) => write!(
                f,
                "pincode '{}': use numbers only, at least {} digits",
                pincode, MIN_PINCODE_LEN
            ),
            ValidationError::ScoreOutOfRange { score, max_score } => {
                write!(f, "score {}: must be between 0 and {}", score, max_score)
            }
            ValidationError::InvalidMaxScore(max_score) => {
                write!(
                    f,
                    "max score {}: must be a positive number no larger than {}",
                    max_score, MAX_SCORE_CEILING
                )
            }
            ValidationError::MaxScoreBelowScores { max_score, highest } => write!(
                f,
                "max score {}: a candidate already has a score of {}",
                max_score, highest
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
