//! Ranking and aggregate statistics.
//!
//! Everything here is a pure function of a [`Roster`] snapshot, recomputed on
//! each call. Nothing is cached between calls, so results can never lag behind
//! a mutation.
//!
//! ## Ranking
//!
//! Standard competition ranking ("1224"): a candidate's rank is one plus the
//! number of candidates with a strictly higher score. Tied scores share a rank
//! and the next lower score skips ahead by the size of the tie.
//!
//! ## Percentile
//!
//! The share of the population scoring at or below the candidate, 0 to 100.
//! Ties count in the candidate's favour, so the top scorer sits at 100.
//!
//! ## Empty populations
//!
//! Averages and the pass rate are `None` when there is nothing to average.

use crate::error::Result;
use crate::model::pass_threshold;
use crate::store::roster::Roster;

#[derive(Debug, Clone, PartialEq)]
pub struct RankInfo {
    pub name: String,
    pub sat_score: u32,
    pub passed: bool,
    pub rank: usize,
    pub percentile: f64,
    /// Other candidates with exactly the same score
    pub tied_with: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub max_score: f64,
    pub threshold: f64,
    pub average_all: Option<f64>,
    pub average_passed: Option<f64>,
    pub average_failed: Option<f64>,
    pub pass_rate: Option<f64>,
}

impl Summary {
    /// Overall average as a percentage of the max score.
    pub fn average_share(&self) -> Option<f64> {
        self.average_all.map(|avg| avg / self.max_score * 100.0)
    }
}

pub fn rank_of(roster: &Roster, name: &str) -> Result<RankInfo> {
    let me = roster.get(name)?;
    let scores = roster.list_all().iter().map(|c| c.sat_score);

    let mut higher = 0;
    let mut at_or_below = 0;
    let mut same = 0;
    for score in scores {
        if score > me.sat_score {
            higher += 1;
        } else {
            at_or_below += 1;
            if score == me.sat_score {
                same += 1;
            }
        }
    }

    let total = roster.len();
    Ok(RankInfo {
        name: me.name.clone(),
        sat_score: me.sat_score,
        passed: me.passed,
        rank: higher + 1,
        percentile: at_or_below as f64 / total as f64 * 100.0,
        tied_with: same - 1,
        total,
    })
}

pub fn average_all(roster: &Roster) -> Option<f64> {
    mean(roster.list_all().iter().map(|c| c.sat_score))
}

pub fn average_passed(roster: &Roster) -> Option<f64> {
    mean(roster.filter_by_status(true).iter().map(|c| c.sat_score))
}

pub fn average_failed(roster: &Roster) -> Option<f64> {
    mean(roster.filter_by_status(false).iter().map(|c| c.sat_score))
}

/// Percentage of candidates who passed.
pub fn pass_rate(roster: &Roster) -> Option<f64> {
    if roster.is_empty() {
        return None;
    }
    let passed = roster.filter_by_status(true).len();
    Some(passed as f64 / roster.len() as f64 * 100.0)
}

pub fn summary(roster: &Roster) -> Summary {
    let passed = roster.filter_by_status(true).len();
    Summary {
        total: roster.len(),
        passed,
        failed: roster.len() - passed,
        max_score: roster.max_score(),
        threshold: pass_threshold(roster.max_score()),
        average_all: average_all(roster),
        average_passed: average_passed(roster),
        average_failed: average_failed(roster),
        pass_rate: pass_rate(roster),
    }
}

fn mean(scores: impl Iterator<Item = u32>) -> Option<f64> {
    let (sum, count) = scores.fold((0u64, 0usize), |(sum, count), s| {
        (sum + u64::from(s), count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
