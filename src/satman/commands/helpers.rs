use crate::error::Result;
use crate::store::persist;
use crate::store::{Roster, StorageBackend};
use tracing::warn;

/// Applies `change` to the roster and persists the result.
///
/// The change only counts as committed once the save succeeds. On any
/// failure, from the change itself or from the save, the roster is put back
/// exactly as it was.
pub fn commit<B, T, F>(roster: &mut Roster, backend: &B, change: F) -> Result<T>
where
    B: StorageBackend,
    F: FnOnce(&mut Roster) -> Result<T>,
{
    let snapshot = roster.clone();

    let value = match change(roster) {
        Ok(value) => value,
        Err(e) => {
            *roster = snapshot;
            return Err(e);
        }
    };

    if let Err(e) = persist::save(backend, roster) {
        warn!(error = %e, "save failed, rolling back in-memory change");
        *roster = snapshot;
        return Err(e);
    }

    Ok(value)
}
