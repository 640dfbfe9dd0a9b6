use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rstest::rstest;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::check_ins::core::period::{PeriodPreset, resolve};
use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::core::year_month::YearMonth;
use crate::modules::check_ins::use_cases::summarize_period::aggregator::Aggregator;
use crate::shared::infrastructure::clock::FixedClock;
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::month_locks::MonthLockStore;
use crate::shared::infrastructure::roster::in_memory::InMemoryRoster;
use crate::shared::infrastructure::sqlite::SqliteStore;
use crate::shell::http::app;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::submit_check_in::SubmitCheckInBuilder;

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

async fn seeded_store() -> Arc<SqliteStore> {
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());
    let commands = [
        (SubmitCheckInBuilder::new().employee_id("E0001").date(day(6, 3)), "A"),
        (SubmitCheckInBuilder::new().employee_id("E0002").date(day(6, 3)), "A"),
        (
            SubmitCheckInBuilder::new()
                .employee_id("E0002")
                .date(day(6, 4))
                .shift(Shift::Evening)
                .points(0.5),
            "A",
        ),
        (
            SubmitCheckInBuilder::new()
                .employee_id("E0003")
                .date(day(5, 31))
                .points(2.0),
            "B",
        ),
    ];
    for (builder, group) in commands {
        store
            .insert(builder.build().into_entry(group.into()))
            .await
            .unwrap();
    }
    store
}

async fn dashboard(store: Arc<SqliteStore>, today: NaiveDate, query: &str) -> serde_json::Value {
    let state = AppState::new(
        store.clone(),
        store,
        Arc::new(InMemoryRoster::sample()),
        Arc::new(FixedClock(today)),
    );
    let router: Router = app(state);
    let response = router
        .oneshot(
            Request::get(format!("/dashboard{query}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn todays_dashboard_counts_both_morning_check_ins() {
    let json = dashboard(seeded_store().await, day(6, 3), "?preset=today").await;

    assert_eq!(json["total_count"], 2);
    assert_eq!(json["by_date"], serde_json::json!({"2024-06-03": 2}));
    assert_eq!(json["by_shift"], serde_json::json!({"morning": 2}));
}

#[tokio::test]
async fn this_week_spans_monday_to_sunday() {
    let json = dashboard(seeded_store().await, day(6, 5), "?preset=this_week").await;

    assert_eq!(json["range"]["start"], "2024-06-03");
    assert_eq!(json["range"]["end"], "2024-06-10");
    assert_eq!(json["days"], 7);
    assert_eq!(json["total_count"], 3);
    assert_eq!(json["by_employee"][0]["employee_id"], "E0002");
    assert_eq!(json["by_employee"][0]["display_name"], "Hanako Sato");
    assert_eq!(json["by_employee"][0]["count"], 2);
    assert_eq!(json["by_employee"][0]["points"], 1.5);
}

#[tokio::test]
async fn group_totals_are_ranked_by_points() {
    let query = "?preset=custom&start=2024-05-01&end=2024-06-30";
    let json = dashboard(seeded_store().await, day(6, 4), query).await;

    assert_eq!(json["total_points"], 4.5);
    assert_eq!(json["by_group"][0]["group"], "A");
    assert_eq!(json["by_group"][0]["points"], 2.5);
    assert_eq!(json["by_group"][1]["group"], "B");
    assert_eq!(json["by_group"][1]["points"], 2.0);
}

#[tokio::test]
async fn last_month_only_sees_the_previous_month() {
    let json = dashboard(seeded_store().await, day(6, 14), "?preset=last_month").await;

    assert_eq!(json["range"]["start"], "2024-05-01");
    assert_eq!(json["range"]["end"], "2024-06-01");
    assert_eq!(json["total_count"], 1);
    assert_eq!(json["entries"][0]["employee_id"], "E0003");
}

#[tokio::test]
async fn month_locks_do_not_hide_entries_from_the_dashboard() {
    let store = seeded_store().await;
    store
        .lock(YearMonth::new(2024, 6).unwrap())
        .await
        .unwrap();

    let json = dashboard(store, day(6, 3), "?preset=this_month").await;

    assert_eq!(json["total_count"], 3);
}

#[rstest]
#[case(PeriodPreset::Today)]
#[case(PeriodPreset::ThisWeek)]
#[case(PeriodPreset::ThisMonth)]
#[case(PeriodPreset::LastMonth)]
#[tokio::test]
async fn every_summary_total_matches_its_entries(#[case] preset: PeriodPreset) {
    let store = seeded_store().await;
    let aggregator = Aggregator::new(store);
    let range = resolve(preset, day(6, 4), None).unwrap();

    let summary = aggregator.summarize(range).await.unwrap();

    assert_eq!(summary.total_count, summary.entries.len());
    assert_eq!(summary.by_date.values().sum::<usize>(), summary.total_count);
    assert_eq!(summary.by_shift.values().sum::<usize>(), summary.total_count);
    assert_eq!(
        summary.by_group.iter().map(|g| g.points).sum::<Points>(),
        summary.total_points
    );
    assert!(summary.entries.iter().all(|e| range.contains(e.date)));
}

#[rstest]
fn last_month_before_the_fifteenth_of_march() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let range = resolve(PeriodPreset::LastMonth, today, None).unwrap();

    assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}
