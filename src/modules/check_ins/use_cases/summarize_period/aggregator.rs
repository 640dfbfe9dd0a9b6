use std::sync::Arc;

use crate::modules::check_ins::core::date_range::DateRange;
use crate::modules::check_ins::core::summary::Summary;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};

pub struct Aggregator<TEntryStore>
where
    TEntryStore: EntryStore + ?Sized,
{
    entry_store: Arc<TEntryStore>,
}

impl<TEntryStore> Aggregator<TEntryStore>
where
    TEntryStore: EntryStore + ?Sized,
{
    pub fn new(entry_store: Arc<TEntryStore>) -> Self {
        Self { entry_store }
    }

    pub async fn summarize(&self, range: DateRange) -> Result<Summary, EntryStoreError> {
        let entries = self.entry_store.list(range).await?;
        Ok(Summary::from_entries(range, entries))
    }
}
