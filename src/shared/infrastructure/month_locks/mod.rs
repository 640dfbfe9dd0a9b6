use async_trait::async_trait;
use thiserror::Error;

use crate::modules::check_ins::core::year_month::YearMonth;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthLockError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Closed months accept no further check-ins. Locking and unlocking are idempotent.
#[async_trait]
pub trait MonthLockStore: Send + Sync {
    async fn lock(&self, month: YearMonth) -> Result<(), MonthLockError>;
    async fn unlock(&self, month: YearMonth) -> Result<(), MonthLockError>;
    async fn is_locked(&self, month: YearMonth) -> Result<bool, MonthLockError>;
}

pub mod in_memory;
