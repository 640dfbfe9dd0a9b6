use std::sync::Arc;
use thiserror::Error;

use crate::modules::check_ins::core::date_range::InvalidRangeError;
use crate::modules::check_ins::core::period::resolve;
use crate::modules::check_ins::core::summary::Summary;
use crate::modules::check_ins::use_cases::summarize_period::aggregator::Aggregator;
use crate::modules::check_ins::use_cases::summarize_period::query::SummarizePeriod;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<EntryStoreError> for SummarizeError {
    fn from(err: EntryStoreError) -> Self {
        match err {
            EntryStoreError::Unavailable(reason) => SummarizeError::StorageUnavailable(reason),
            other => SummarizeError::StorageUnavailable(other.to_string()),
        }
    }
}

pub struct SummarizePeriodHandler<TEntryStore, TClock>
where
    TEntryStore: EntryStore + ?Sized,
    TClock: Clock + ?Sized,
{
    aggregator: Aggregator<TEntryStore>,
    clock: Arc<TClock>,
}

impl<TEntryStore, TClock> SummarizePeriodHandler<TEntryStore, TClock>
where
    TEntryStore: EntryStore + ?Sized,
    TClock: Clock + ?Sized,
{
    pub fn new(entry_store: Arc<TEntryStore>, clock: Arc<TClock>) -> Self {
        Self {
            aggregator: Aggregator::new(entry_store),
            clock,
        }
    }

    pub async fn handle(&self, query: SummarizePeriod) -> Result<Summary, SummarizeError> {
        let today = self.clock.today();
        let range = resolve(query.preset, today, query.custom_bounds())?;
        tracing::debug!(
            preset = %query.preset,
            start = %range.start(),
            end = %range.end(),
            "summarizing period"
        );
        Ok(self.aggregator.summarize(range).await?)
    }
}
