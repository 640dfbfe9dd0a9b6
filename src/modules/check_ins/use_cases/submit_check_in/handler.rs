use std::sync::Arc;
use thiserror::Error;

use crate::modules::check_ins::core::shift_entry::{ShiftEntry, ShiftKey};
use crate::modules::check_ins::core::year_month::YearMonth;
use crate::modules::check_ins::use_cases::submit_check_in::command::SubmitCheckIn;
use crate::modules::check_ins::use_cases::submit_check_in::dedup_guard;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};
use crate::shared::infrastructure::month_locks::{MonthLockError, MonthLockStore};
use crate::shared::infrastructure::roster::{Roster, RosterError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("check-in already recorded for {0}")]
    Duplicate(ShiftKey),

    #[error("employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("month {0} is closed for check-ins")]
    MonthLocked(YearMonth),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<EntryStoreError> for SubmitError {
    fn from(err: EntryStoreError) -> Self {
        match err {
            EntryStoreError::Duplicate(key) => SubmitError::Duplicate(key),
            EntryStoreError::Unavailable(reason) => SubmitError::StorageUnavailable(reason),
        }
    }
}

impl From<MonthLockError> for SubmitError {
    fn from(err: MonthLockError) -> Self {
        match err {
            MonthLockError::Unavailable(reason) => SubmitError::StorageUnavailable(reason),
        }
    }
}

impl From<RosterError> for SubmitError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NotFound(employee_id) => SubmitError::EmployeeNotFound(employee_id),
            other => SubmitError::StorageUnavailable(other.to_string()),
        }
    }
}

pub struct SubmitCheckInHandler<TEntryStore, TMonthLocks, TRoster>
where
    TEntryStore: EntryStore + ?Sized,
    TMonthLocks: MonthLockStore + ?Sized,
    TRoster: Roster + ?Sized,
{
    entry_store: Arc<TEntryStore>,
    month_locks: Arc<TMonthLocks>,
    roster: Arc<TRoster>,
}

impl<TEntryStore, TMonthLocks, TRoster> SubmitCheckInHandler<TEntryStore, TMonthLocks, TRoster>
where
    TEntryStore: EntryStore + ?Sized,
    TMonthLocks: MonthLockStore + ?Sized,
    TRoster: Roster + ?Sized,
{
    pub fn new(
        entry_store: Arc<TEntryStore>,
        month_locks: Arc<TMonthLocks>,
        roster: Arc<TRoster>,
    ) -> Self {
        Self {
            entry_store,
            month_locks,
            roster,
        }
    }

    pub async fn handle(&self, command: SubmitCheckIn) -> Result<ShiftEntry, SubmitError> {
        let result = self.submit(command).await;
        match &result {
            Ok(entry) => tracing::info!(
                entry_id = %entry.entry_id,
                employee_id = %entry.employee_id,
                date = %entry.date,
                shift = %entry.shift,
                group = %entry.group,
                points = %entry.points,
                "check-in recorded"
            ),
            Err(SubmitError::StorageUnavailable(reason)) => {
                tracing::error!(%reason, "check-in failed")
            }
            Err(reason) => tracing::warn!(%reason, "check-in rejected"),
        }
        result
    }

    // The lock check and the insert are two separate calls. A month closed between
    // them can still receive the one in-flight check-in, which stays listed like any
    // entry recorded before the close.
    async fn submit(&self, command: SubmitCheckIn) -> Result<ShiftEntry, SubmitError> {
        let employee = self.roster.lookup(&command.employee_id).await?;

        let month = YearMonth::of(command.date);
        if self.month_locks.is_locked(month).await? {
            return Err(SubmitError::MonthLocked(month));
        }

        let candidate = command.into_entry(employee.group);
        dedup_guard::check(&*self.entry_store, &candidate).await?;
        Ok(self.entry_store.insert(candidate).await?)
    }
}
