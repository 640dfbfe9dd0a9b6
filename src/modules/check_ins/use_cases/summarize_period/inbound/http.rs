use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::modules::check_ins::core::date_range::DateRange;
use crate::modules::check_ins::core::period::PeriodPreset;
use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::core::shift_entry::ShiftEntry;
use crate::modules::check_ins::core::summary::{GroupTally, Summary};
use crate::modules::check_ins::use_cases::summarize_period::handler::SummarizeError;
use crate::modules::check_ins::use_cases::summarize_period::query::SummarizePeriod;
use crate::shared::infrastructure::roster::Roster;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    pub preset: Option<PeriodPreset>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct RankedEmployee {
    pub employee_id: String,
    pub display_name: Option<String>,
    pub count: usize,
    pub points: Points,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub range: DateRange,
    pub days: i64,
    pub total_count: usize,
    pub total_points: Points,
    pub by_date: BTreeMap<NaiveDate, usize>,
    pub by_shift: BTreeMap<Shift, usize>,
    pub by_group: Vec<GroupTally>,
    pub by_employee: Vec<RankedEmployee>,
    pub entries: Vec<ShiftEntry>,
}

impl DashboardView {
    pub fn new(summary: Summary, names: &HashMap<String, String>) -> Self {
        let by_employee = summary
            .by_employee
            .into_iter()
            .map(|tally| RankedEmployee {
                display_name: names.get(&tally.employee_id).cloned(),
                employee_id: tally.employee_id,
                count: tally.count,
                points: tally.points,
            })
            .collect();
        Self {
            range: summary.range,
            days: summary.range.days(),
            total_count: summary.total_count,
            total_points: summary.total_points,
            by_date: summary.by_date,
            by_shift: summary.by_shift,
            by_group: summary.by_group,
            by_employee,
            entries: summary.entries,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    let query = SummarizePeriod {
        preset: params.preset.unwrap_or_default(),
        start: params.start,
        end: params.end,
    };

    match state.summarize_handler.handle(query).await {
        Ok(summary) => {
            let names = state.roster.display_names().await;
            Json(DashboardView::new(summary, &names)).into_response()
        }
        Err(e @ SummarizeError::InvalidRange(_)) => error_response(StatusCode::BAD_REQUEST, e),
        Err(e @ SummarizeError::StorageUnavailable(_)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, e)
        }
    }
}
