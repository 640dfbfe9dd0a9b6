use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::core::shift_entry::ShiftEntry;
use crate::modules::check_ins::use_cases::submit_check_in::command::{SubmitCheckIn, clean_memo};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlShiftEntry {
    pub entry_id: String,
    pub employee_id: String,
    pub group: String,
    pub date: String,
    pub shift: String,
    pub points: f64,
    pub memo: Option<String>,
    pub recorded_at: String,
}

impl From<ShiftEntry> for GqlShiftEntry {
    fn from(e: ShiftEntry) -> Self {
        Self {
            entry_id: e.entry_id.to_string(),
            employee_id: e.employee_id,
            group: e.group,
            date: e.date.to_string(),
            shift: e.shift.to_string(),
            points: e.points.value(),
            memo: e.memo,
            recorded_at: e.recorded_at.to_rfc3339(),
        }
    }
}

#[derive(Default)]
pub struct SubmitCheckInMutation;

#[Object]
impl SubmitCheckInMutation {
    /// `date` is `YYYY-MM-DD` and defaults to today. `points` defaults to 0.
    async fn submit_check_in(
        &self,
        context: &Context<'_>,
        employee_id: String,
        date: Option<String>,
        shift: String,
        points: Option<f64>,
        memo: Option<String>,
    ) -> GqlResult<GqlShiftEntry> {
        let state = context.data_unchecked::<AppState>();

        let shift = shift
            .parse::<Shift>()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let date = match date {
            Some(raw) => raw
                .parse::<NaiveDate>()
                .map_err(|e| async_graphql::Error::new(format!("invalid date {raw:?}: {e}")))?,
            None => state.clock.today(),
        };
        let points = match points {
            Some(raw) => Points::new(raw).map_err(|e| async_graphql::Error::new(e.to_string()))?,
            None => Points::ZERO,
        };

        let command = SubmitCheckIn {
            employee_id: employee_id.trim().to_string(),
            date,
            shift,
            points,
            memo: clean_memo(memo),
        };

        let entry = state
            .submit_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(entry.into())
    }
}
