use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::check_ins::core::period::PeriodPreset;
use crate::modules::check_ins::use_cases::submit_check_in::inbound::graphql::GqlShiftEntry;
use crate::modules::check_ins::use_cases::summarize_period::inbound::http::DashboardView;
use crate::modules::check_ins::use_cases::summarize_period::query::SummarizePeriod;
use crate::shared::infrastructure::roster::Roster;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDateCount {
    pub date: String,
    pub count: i64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlShiftCount {
    pub shift: String,
    pub count: i64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEmployeeCount {
    pub employee_id: String,
    pub display_name: Option<String>,
    pub count: i64,
    pub points: f64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlGroupTotal {
    pub group: String,
    pub count: i64,
    pub points: f64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDashboard {
    pub start: String,
    pub end: String,
    pub days: i64,
    pub total_count: i64,
    pub total_points: f64,
    pub by_date: Vec<GqlDateCount>,
    pub by_shift: Vec<GqlShiftCount>,
    pub by_group: Vec<GqlGroupTotal>,
    pub by_employee: Vec<GqlEmployeeCount>,
    pub entries: Vec<GqlShiftEntry>,
}

impl From<DashboardView> for GqlDashboard {
    fn from(v: DashboardView) -> Self {
        Self {
            start: v.range.start().to_string(),
            end: v.range.end().to_string(),
            days: v.days,
            total_count: v.total_count as i64,
            total_points: v.total_points.value(),
            by_date: v
                .by_date
                .into_iter()
                .map(|(date, count)| GqlDateCount {
                    date: date.to_string(),
                    count: count as i64,
                })
                .collect(),
            by_shift: v
                .by_shift
                .into_iter()
                .map(|(shift, count)| GqlShiftCount {
                    shift: shift.to_string(),
                    count: count as i64,
                })
                .collect(),
            by_group: v
                .by_group
                .into_iter()
                .map(|g| GqlGroupTotal {
                    group: g.group,
                    count: g.count as i64,
                    points: g.points.value(),
                })
                .collect(),
            by_employee: v
                .by_employee
                .into_iter()
                .map(|e| GqlEmployeeCount {
                    employee_id: e.employee_id,
                    display_name: e.display_name,
                    count: e.count as i64,
                    points: e.points.value(),
                })
                .collect(),
            entries: v.entries.into_iter().map(Into::into).collect(),
        }
    }
}

fn parse_date(raw: Option<String>) -> GqlResult<Option<NaiveDate>> {
    raw.map(|raw| {
        raw.parse::<NaiveDate>()
            .map_err(|e| async_graphql::Error::new(format!("invalid date {raw:?}: {e}")))
    })
    .transpose()
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    /// `preset` is one of today, this_week, this_month, last_month or custom.
    async fn dashboard(
        &self,
        context: &Context<'_>,
        preset: Option<String>,
        start: Option<String>,
        end: Option<String>,
    ) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();

        let preset = match preset {
            Some(raw) => raw
                .parse::<PeriodPreset>()
                .map_err(|e| async_graphql::Error::new(e.to_string()))?,
            None => PeriodPreset::default(),
        };
        let query = SummarizePeriod {
            preset,
            start: parse_date(start)?,
            end: parse_date(end)?,
        };

        let summary = state
            .summarize_handler
            .handle(query)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let names = state.roster.display_names().await;

        Ok(DashboardView::new(summary, &names).into())
    }
}
