use crate::modules::check_ins::core::shift_entry::NewShiftEntry;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};

/// Rejects a candidate whose `(date, shift, employee_id)` is already stored.
///
/// Read-only. A writer that races past this gate is still stopped by the store's
/// own uniqueness check inside `insert`.
pub async fn check<S>(store: &S, candidate: &NewShiftEntry) -> Result<(), EntryStoreError>
where
    S: EntryStore + ?Sized,
{
    let key = candidate.key();
    if store.contains(&key).await? {
        return Err(EntryStoreError::Duplicate(key));
    }
    Ok(())
}
