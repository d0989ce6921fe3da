use crate::commands::{status_label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Roster, StorageBackend};
use tracing::debug;

use super::helpers::commit;

pub fn run<B: StorageBackend>(
    roster: &mut Roster,
    backend: &B,
    name: &str,
    new_score: i64,
) -> Result<CmdResult> {
    let change = commit(roster, backend, |r| r.update_score(name, new_score))?;
    debug!(
        name,
        old = change.old_score,
        new = change.new_score,
        "updated score"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Score updated for {}:",
        change.name
    )));
    result.add_message(CmdMessage::info(format!(
        "  Old: {} ({})",
        change.old_score,
        status_label(change.old_passed)
    )));
    result.add_message(CmdMessage::info(format!(
        "  New: {} ({})",
        change.new_score,
        status_label(change.new_passed)
    )));

    let updated = roster.get(name)?.clone();
    result.score_change = Some(change);
    Ok(result.with_affected(vec![updated]))
}
