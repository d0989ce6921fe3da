use crate::model::{Candidate, Rescale, ScoreChange};
use crate::stats::{RankInfo, Summary};

pub mod delete;
pub mod helpers;
pub mod insert;
pub mod list;
pub mod max_score;
pub mod rank;
pub mod save;
pub mod show;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Candidate>,
    pub listed: Vec<Candidate>,
    pub rank: Option<RankInfo>,
    pub summary: Option<Summary>,
    pub score_change: Option<ScoreChange>,
    pub rescale: Option<Rescale>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, candidates: Vec<Candidate>) -> Self {
        self.affected = candidates;
        self
    }

    pub fn with_listed(mut self, candidates: Vec<Candidate>) -> Self {
        self.listed = candidates;
        self
    }

    pub fn with_rank(mut self, rank: RankInfo) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Which records a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Passed,
    Failed,
}

/// "PASS" / "FAIL", as shown next to scores.
pub fn status_label(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}
