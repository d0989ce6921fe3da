use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Roster, StorageBackend};
use tracing::debug;

use super::helpers::commit;

/// Removes a record. Confirmation is the caller's job.
pub fn run<B: StorageBackend>(roster: &mut Roster, backend: &B, name: &str) -> Result<CmdResult> {
    let removed = commit(roster, backend, |r| r.remove(name))?;
    debug!(name, "deleted candidate");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record for '{}' has been deleted.",
        removed.name
    )));
    Ok(result.with_affected(vec![removed]))
}
