use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::stats;
use crate::store::Roster;

pub fn run(roster: &Roster, name: &str) -> Result<CmdResult> {
    let info = stats::rank_of(roster, name)?;

    let mut result = CmdResult::default();
    if info.tied_with > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} candidate(s) have the same score",
            info.tied_with + 1
        )));
    }
    Ok(result.with_rank(info))
}
