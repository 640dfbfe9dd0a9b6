use async_trait::async_trait;
use thiserror::Error;

use crate::modules::check_ins::core::date_range::DateRange;
use crate::modules::check_ins::core::shift_entry::{NewShiftEntry, ShiftEntry, ShiftKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryStoreError {
    #[error("check-in already recorded for {0}")]
    Duplicate(ShiftKey),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Append-only table of check-ins.
///
/// `insert` must reject a second entry for the same [`ShiftKey`] atomically, even
/// when two writers race past their own existence checks.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn insert(&self, entry: NewShiftEntry) -> Result<ShiftEntry, EntryStoreError>;

    async fn contains(&self, key: &ShiftKey) -> Result<bool, EntryStoreError>;

    /// Entries with `date` inside `range`, ordered by date, then employee id, then shift.
    async fn list(&self, range: DateRange) -> Result<Vec<ShiftEntry>, EntryStoreError>;
}

pub mod in_memory;
