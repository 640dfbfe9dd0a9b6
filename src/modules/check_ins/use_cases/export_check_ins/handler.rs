use std::sync::Arc;
use thiserror::Error;

use crate::modules::check_ins::core::date_range::InvalidRangeError;
use crate::modules::check_ins::use_cases::export_check_ins::query::ExportCheckIns;
use crate::modules::check_ins::use_cases::export_check_ins::records_csv;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("csv encoding failed: {0}")]
    Encoding(String),
}

impl From<EntryStoreError> for ExportError {
    fn from(err: EntryStoreError) -> Self {
        match err {
            EntryStoreError::Unavailable(reason) => ExportError::StorageUnavailable(reason),
            other => ExportError::StorageUnavailable(other.to_string()),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Encoding(err.to_string())
    }
}

/// Read-only CSV export: newest dates first, then employee id, then shift.
pub struct ExportCheckInsHandler<TEntryStore: EntryStore + ?Sized> {
    entry_store: Arc<TEntryStore>,
}

impl<TEntryStore: EntryStore + ?Sized> ExportCheckInsHandler<TEntryStore> {
    pub fn new(entry_store: Arc<TEntryStore>) -> Self {
        Self { entry_store }
    }

    pub async fn handle(&self, query: ExportCheckIns) -> Result<Vec<u8>, ExportError> {
        let range = query.range()?;
        let mut entries = self.entry_store.list(range).await?;
        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
                .then_with(|| a.shift.cmp(&b.shift))
        });
        let csv = records_csv::encode(&entries)?;
        tracing::info!(
            start = %range.start(),
            end = %range.end(),
            rows = entries.len(),
            "check-ins exported"
        );
        Ok(csv)
    }
}
