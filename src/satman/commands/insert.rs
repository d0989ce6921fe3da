use crate::commands::{status_label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCandidate;
use crate::store::{Roster, StorageBackend};
use tracing::debug;

use super::helpers::commit;

pub fn run<B: StorageBackend>(
    roster: &mut Roster,
    backend: &B,
    candidate: NewCandidate,
) -> Result<CmdResult> {
    let added = commit(roster, backend, |r| r.insert(candidate).cloned())?;
    debug!(name = %added.name, score = added.sat_score, "inserted candidate");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} (Score: {}, Status: {})",
        added.name,
        added.sat_score,
        status_label(added.passed)
    )));
    Ok(result.with_affected(vec![added]))
}
