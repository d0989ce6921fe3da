use crate::commands::{CmdMessage, CmdResult, StatusFilter};
use crate::error::Result;
use crate::store::Roster;

pub fn run(roster: &Roster, filter: StatusFilter) -> Result<CmdResult> {
    let listed: Vec<_> = match filter {
        StatusFilter::All => roster.list_all().to_vec(),
        StatusFilter::Passed => roster.filter_by_status(true).into_iter().cloned().collect(),
        StatusFilter::Failed => roster.filter_by_status(false).into_iter().cloned().collect(),
    };

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let what = match filter {
            StatusFilter::All => "No records available.",
            StatusFilter::Passed => "No candidates with PASS status found.",
            StatusFilter::Failed => "No candidates with FAIL status found.",
        };
        result.add_message(CmdMessage::info(what));
    }

    Ok(result.with_listed(listed))
}
