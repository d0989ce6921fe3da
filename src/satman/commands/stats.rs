use crate::commands::{CmdMessage, CmdResult};
use crate::stats;
use crate::store::Roster;

pub fn run(roster: &Roster) -> CmdResult {
    let summary = stats::summary(roster);
    let mut result = CmdResult::default();
    if summary.total == 0 {
        result.add_message(CmdMessage::info("No records available for calculation."));
    }
    result.with_summary(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCandidate;

    #[test]
    fn empty_roster_has_no_averages() {
        let result = run(&Roster::default());
        let summary = result.summary.unwrap();
        assert_eq!(summary.average_all, None);
        assert_eq!(summary.pass_rate, None);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn summary_counts() {
        let mut roster = Roster::default();
        roster
            .insert(NewCandidate::new("Alice", "", "", "", "02101", 1350))
            .unwrap();
        let summary = run(&roster).summary.unwrap();
        assert_eq!((summary.total, summary.passed, summary.failed), (1, 1, 0));
        assert_eq!(summary.pass_rate, Some(100.0));
    }
}
