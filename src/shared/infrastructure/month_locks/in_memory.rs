use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::modules::check_ins::core::year_month::YearMonth;
use crate::shared::infrastructure::month_locks::{MonthLockError, MonthLockStore};

#[derive(Default)]
pub struct InMemoryMonthLocks {
    locked: RwLock<HashSet<YearMonth>>,
    is_offline: bool,
}

impl InMemoryMonthLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), MonthLockError> {
        if self.is_offline {
            return Err(MonthLockError::Unavailable("Month locks offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MonthLockStore for InMemoryMonthLocks {
    async fn lock(&self, month: YearMonth) -> Result<(), MonthLockError> {
        self.ensure_online()?;
        self.locked.write().await.insert(month);
        Ok(())
    }

    async fn unlock(&self, month: YearMonth) -> Result<(), MonthLockError> {
        self.ensure_online()?;
        self.locked.write().await.remove(&month);
        Ok(())
    }

    async fn is_locked(&self, month: YearMonth) -> Result<bool, MonthLockError> {
        self.ensure_online()?;
        Ok(self.locked.read().await.contains(&month))
    }
}
