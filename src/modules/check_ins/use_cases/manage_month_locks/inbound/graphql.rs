use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::check_ins::core::year_month::YearMonth;
use crate::shared::infrastructure::month_locks::MonthLockStore;
use crate::shell::state::AppState;

fn parse_month(raw: &str) -> GqlResult<YearMonth> {
    raw.parse::<YearMonth>()
        .map_err(|e| async_graphql::Error::new(e.to_string()))
}

#[derive(Default)]
pub struct MonthLockQuery;

#[Object]
impl MonthLockQuery {
    async fn month_locked(&self, context: &Context<'_>, month: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let month = parse_month(&month)?;
        Ok(state.month_locks.is_locked(month).await?)
    }
}

#[derive(Default)]
pub struct MonthLockMutation;

#[Object]
impl MonthLockMutation {
    async fn lock_month(&self, context: &Context<'_>, month: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let month = parse_month(&month)?;
        state.month_locks.lock(month).await?;
        tracing::info!(%month, "month locked");
        Ok(true)
    }

    async fn unlock_month(&self, context: &Context<'_>, month: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let month = parse_month(&month)?;
        state.month_locks.unlock(month).await?;
        tracing::info!(%month, "month unlocked");
        Ok(true)
    }
}
