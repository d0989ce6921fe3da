//! In-memory record store.
//!
//! [`Roster`] maps candidate names to records. Names are unique keys; a
//! second insert under the same name is rejected, never merged. Records keep
//! their insertion order for listing, with a name index beside them for
//! lookups.
//!
//! The roster knows nothing about disk. The command layer decides when a
//! mutation has to be persisted and restores the previous roster if it can't
//! be.

use crate::error::{Result, SatError};
use crate::model::{derive_passed, Candidate, NewCandidate, Rescale, ScoreChange, DEFAULT_MAX_SCORE};
use crate::validation::{
    validate_max_score, validate_name, validate_pincode, validate_score, ValidationError,
};
use std::collections::HashMap;

const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    max_score: f64,
    records: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl Roster {
    pub fn new(max_score: f64) -> Result<Self> {
        validate_max_score(max_score)?;
        Ok(Self {
            max_score,
            ..Self::default()
        })
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All records, in insertion order.
    pub fn list_all(&self) -> &[Candidate] {
        &self.records
    }

    pub fn filter_by_status(&self, passed: bool) -> Vec<&Candidate> {
        self.records.iter().filter(|c| c.passed == passed).collect()
    }

    /// Exact lookup. A miss carries up to three similar names.
    pub fn get(&self, name: &str) -> Result<&Candidate> {
        match self.index.get(name) {
            Some(&pos) => Ok(&self.records[pos]),
            None => Err(self.not_found(name)),
        }
    }

    /// Names that contain the query, or are contained by it, ignoring case.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|c| {
                let name = c.name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            })
            .take(MAX_SUGGESTIONS)
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn insert(&mut self, new: NewCandidate) -> Result<&Candidate> {
        validate_name(&new.name)?;
        if self.contains(&new.name) {
            return Err(SatError::DuplicateName(new.name));
        }
        validate_pincode(&new.pincode)?;
        let sat_score = validate_score(new.sat_score, self.max_score)?;

        let candidate = Candidate {
            passed: derive_passed(sat_score, self.max_score),
            name: new.name,
            address: new.address,
            city: new.city,
            country: new.country,
            pincode: new.pincode,
            sat_score,
        };

        Ok(self.push(candidate))
    }

    pub fn update_score(&mut self, name: &str, new_score: i64) -> Result<ScoreChange> {
        let pos = self.position(name)?;
        let new_score = validate_score(new_score, self.max_score)?;
        let max_score = self.max_score;

        let record = &mut self.records[pos];
        let change = ScoreChange {
            name: record.name.clone(),
            old_score: record.sat_score,
            new_score,
            old_passed: record.passed,
            new_passed: derive_passed(new_score, max_score),
        };
        record.sat_score = change.new_score;
        record.passed = change.new_passed;

        Ok(change)
    }

    pub fn remove(&mut self, name: &str) -> Result<Candidate> {
        let pos = self.position(name)?;
        let removed = self.records.remove(pos);
        self.index.remove(name);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Changes the max score and re-derives every record's pass flag.
    ///
    /// Rejects a max below the highest stored score, since those records
    /// would no longer satisfy `sat_score <= max_score`.
    pub fn set_max_score(&mut self, new_max: f64) -> Result<Rescale> {
        validate_max_score(new_max)?;
        if let Some(highest) = self.records.iter().map(|c| c.sat_score).max() {
            if f64::from(highest) > new_max {
                return Err(ValidationError::MaxScoreBelowScores {
                    max_score: new_max,
                    highest,
                }
                .into());
            }
        }

        let old_max = self.max_score;
        self.max_score = new_max;

        let mut flipped = Vec::new();
        for record in &mut self.records {
            let passed = derive_passed(record.sat_score, new_max);
            if passed != record.passed {
                record.passed = passed;
                flipped.push(record.name.clone());
            }
        }

        Ok(Rescale {
            old_max,
            new_max,
            flipped,
        })
    }

    /// Adds a record that has already been validated and derived.
    pub(crate) fn push(&mut self, candidate: Candidate) -> &Candidate {
        let pos = self.records.len();
        self.index.insert(candidate.name.clone(), pos);
        self.records.push(candidate);
        &self.records[pos]
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| self.not_found(name))
    }

    fn not_found(&self, name: &str) -> SatError {
        SatError::NotFound {
            name: name.to_string(),
            suggestions: self.suggestions(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, score: i64) -> NewCandidate {
        NewCandidate::new(name, "123 Oak St", "Boston", "USA", "02101", score)
    }

    fn roster_with(entries: &[(&str, i64)]) -> Roster {
        let mut roster = Roster::default();
        for (name, score) in entries {
            roster.insert(candidate(name, *score)).unwrap();
        }
        roster
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster
            .list_all()
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    #[test]
    fn insert_derives_passed() {
        let roster = roster_with(&[("Alice", 1350), ("Bob", 500), ("Carl", 400)]);
        assert!(roster.get("Alice").unwrap().passed);
        assert!(roster.get("Bob").unwrap().passed);
        assert!(!roster.get("Carl").unwrap().passed);
    }

    #[test]
    fn insert_passed_matches_threshold_for_every_score() {
        let mut roster = Roster::new(100.0).unwrap();
        for score in 0..=100 {
            let rec = roster.insert(candidate(&format!("c{}", score), score)).unwrap();
            assert_eq!(rec.passed, score > 30, "score {}", score);
        }
    }

    #[test]
    fn duplicate_insert_leaves_store_unchanged() {
        let mut roster = roster_with(&[("Alice", 1350)]);
        let before = roster.clone();

        let err = roster.insert(candidate("Alice", 10)).unwrap_err();
        assert!(matches!(err, SatError::DuplicateName(ref n) if n == "Alice"));
        assert_eq!(roster, before);
    }

    #[test]
    fn insert_rejects_invalid_fields() {
        let mut roster = Roster::default();
        assert!(matches!(
            roster.insert(candidate("", 10)),
            Err(SatError::Validation(ValidationError::EmptyName))
        ));
        assert!(matches!(
            roster.insert(NewCandidate::new("Dee", "", "", "", "12", 10)),
            Err(SatError::Validation(ValidationError::InvalidPincode(_)))
        ));
        assert!(matches!(
            roster.insert(candidate("Dee", 1601)),
            Err(SatError::Validation(ValidationError::ScoreOutOfRange { .. }))
        ));
        assert!(matches!(
            roster.insert(candidate("Dee", -3)),
            Err(SatError::Validation(ValidationError::ScoreOutOfRange { .. }))
        ));
        assert!(roster.is_empty());
    }

    #[test]
    fn get_miss_suggests_similar_names() {
        let roster = roster_with(&[
            ("Alice Smith", 900),
            ("Alicia Keys", 800),
            ("Bob", 700),
            ("alice jones", 600),
            ("Malice", 500),
        ]);

        let err = roster.get("alice").unwrap_err();
        assert_eq!(err.suggestions(), ["Alice Smith", "alice jones", "Malice"]);
    }

    #[test]
    fn get_miss_suggests_names_contained_in_query() {
        let roster = roster_with(&[("Bob", 700)]);
        let err = roster.get("Bobby Tables").unwrap_err();
        assert_eq!(err.suggestions(), ["Bob"]);
    }

    #[test]
    fn get_miss_without_matches() {
        let roster = roster_with(&[("Bob", 700)]);
        let err = roster.get("Zed").unwrap_err();
        assert!(matches!(err, SatError::NotFound { ref name, .. } if name == "Zed"));
        assert!(err.suggestions().is_empty());
    }

    #[test]
    fn update_score_reports_before_and_after() {
        let mut roster = roster_with(&[("Carl", 400)]);
        let change = roster.update_score("Carl", 1000).unwrap();

        assert_eq!(change.old_score, 400);
        assert_eq!(change.new_score, 1000);
        assert!(!change.old_passed);
        assert!(change.new_passed);
        assert!(roster.get("Carl").unwrap().passed);
    }

    #[test]
    fn update_score_out_of_range_keeps_record() {
        let mut roster = roster_with(&[("Carl", 400)]);
        assert!(roster.update_score("Carl", 5000).is_err());
        assert_eq!(roster.get("Carl").unwrap().sat_score, 400);
        assert!(matches!(
            roster.update_score("Nobody", 10),
            Err(SatError::NotFound { .. })
        ));
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut roster = roster_with(&[("A", 1), ("B", 2), ("C", 3)]);
        let removed = roster.remove("A").unwrap();
        assert_eq!(removed.name, "A");

        assert_eq!(roster.get("C").unwrap().sat_score, 3);
        assert_eq!(roster.get("B").unwrap().sat_score, 2);
        assert_eq!(names(&roster), ["B", "C"]);
        assert!(roster.remove("A").is_err());
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let roster = roster_with(&[("Zoe", 1), ("Adam", 2), ("Mia", 3)]);
        assert_eq!(names(&roster), ["Zoe", "Adam", "Mia"]);
    }

    #[test]
    fn filter_by_status_partitions() {
        let roster = roster_with(&[("Alice", 1350), ("Bob", 500), ("Carl", 400)]);
        let names_with = |passed| -> Vec<String> {
            roster
                .filter_by_status(passed)
                .iter()
                .map(|c| c.name.clone())
                .collect()
        };
        assert_eq!(names_with(true), ["Alice", "Bob"]);
        assert_eq!(names_with(false), ["Carl"]);
    }

    #[test]
    fn set_max_score_flips_exactly_the_affected_records() {
        // threshold moves from 480 to 600
        let mut roster =
            roster_with(&[("Alice", 1350), ("Bob", 500), ("Carl", 400), ("Dan", 550)]);
        let rescale = roster.set_max_score(2000.0).unwrap();

        assert_eq!(rescale.old_max, 1600.0);
        assert_eq!(rescale.new_max, 2000.0);
        assert_eq!(rescale.flipped, ["Bob", "Dan"]);
        for c in roster.list_all() {
            assert_eq!(c.passed, derive_passed(c.sat_score, 2000.0));
        }
    }

    #[test]
    fn set_max_score_validation() {
        let mut roster = roster_with(&[("Alice", 1350)]);
        assert!(roster.set_max_score(0.0).is_err());
        assert!(roster.set_max_score(-100.0).is_err());
        assert!(matches!(
            roster.set_max_score(1000.0),
            Err(SatError::Validation(ValidationError::MaxScoreBelowScores { highest: 1350, .. }))
        ));
        assert_eq!(roster.max_score(), 1600.0);
    }

    #[test]
    fn max_score_beyond_storable_scores_is_refused() {
        assert!(matches!(
            Roster::new(1e10),
            Err(SatError::Validation(ValidationError::InvalidMaxScore(_)))
        ));

        let mut roster = Roster::new(4_000_000_000.0).unwrap();
        roster.insert(candidate("Big", 3_000_000_000)).unwrap();
        assert!(roster.get("Big").unwrap().passed);
        assert!(roster.set_max_score(1e10).is_err());
        assert_eq!(roster.max_score(), 4_000_000_000.0);
    }
}
