use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::persist;
use crate::store::{Roster, StorageBackend};

/// Writes the current roster out, even if nothing changed.
pub fn run<B: StorageBackend>(roster: &Roster, backend: &B) -> Result<CmdResult> {
    persist::save(backend, roster)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data saved to {}",
        backend.location().display()
    )));
    result.add_message(CmdMessage::info(format!(
        "  Records: {}, Max Score: {}",
        roster.len(),
        roster.max_score()
    )));
    Ok(result)
}
