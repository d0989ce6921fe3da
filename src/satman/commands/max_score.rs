use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::pass_threshold;
use crate::store::{Roster, StorageBackend};
use tracing::debug;

use super::helpers::commit;

/// Shows the current max score and pass threshold.
pub fn show(roster: &Roster) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Max score: {} (passing threshold: {:.1})",
        roster.max_score(),
        pass_threshold(roster.max_score())
    )));
    result
}

pub fn run<B: StorageBackend>(roster: &mut Roster, backend: &B, new_max: f64) -> Result<CmdResult> {
    let rescale = commit(roster, backend, |r| r.set_max_score(new_max))?;
    debug!(
        old = rescale.old_max,
        new = rescale.new_max,
        flipped = rescale.flipped.len(),
        "rescaled"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Max score updated: {} -> {}",
        rescale.old_max, rescale.new_max
    )));
    if !rescale.flipped.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  {} candidate(s) had their pass/fail status updated.",
            rescale.flipped.len()
        )));
    }

    let affected = rescale
        .flipped
        .iter()
        .map(|name| roster.get(name).cloned())
        .collect::<Result<Vec<_>>>()?;
    result.rescale = Some(rescale);
    Ok(result.with_affected(affected))
}
