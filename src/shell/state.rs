use std::sync::Arc;

use crate::modules::check_ins::use_cases::export_check_ins::handler::ExportCheckInsHandler;
use crate::modules::check_ins::use_cases::submit_check_in::handler::SubmitCheckInHandler;
use crate::modules::check_ins::use_cases::summarize_period::handler::SummarizePeriodHandler;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::entry_store::in_memory::InMemoryEntryStore;
use crate::shared::infrastructure::month_locks::MonthLockStore;
use crate::shared::infrastructure::month_locks::in_memory::InMemoryMonthLocks;
use crate::shared::infrastructure::roster::Roster;
use crate::shared::infrastructure::roster::in_memory::InMemoryRoster;

pub type SubmitHandler = SubmitCheckInHandler<dyn EntryStore, dyn MonthLockStore, dyn Roster>;
pub type SummarizeHandler = SummarizePeriodHandler<dyn EntryStore, dyn Clock>;
pub type ExportHandler = ExportCheckInsHandler<dyn EntryStore>;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: Arc<SubmitHandler>,
    pub summarize_handler: Arc<SummarizeHandler>,
    pub export_handler: Arc<ExportHandler>,
    pub month_locks: Arc<dyn MonthLockStore>,
    pub roster: Arc<dyn Roster>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        entry_store: Arc<dyn EntryStore>,
        month_locks: Arc<dyn MonthLockStore>,
        roster: Arc<dyn Roster>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let submit_handler = Arc::new(SubmitCheckInHandler::new(
            entry_store.clone(),
            month_locks.clone(),
            roster.clone(),
        ));
        let summarize_handler = Arc::new(SummarizePeriodHandler::new(
            entry_store.clone(),
            clock.clone(),
        ));
        let export_handler = Arc::new(ExportCheckInsHandler::new(entry_store));
        Self {
            submit_handler,
            summarize_handler,
            export_handler,
            month_locks,
            roster,
            clock,
        }
    }

    /// Non-durable wiring with the sample roster, for tests and local experiments.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Arc::new(InMemoryEntryStore::new()),
            Arc::new(InMemoryMonthLocks::new()),
            Arc::new(InMemoryRoster::sample()),
            clock,
        )
    }
}
