use chrono::NaiveDate;
use std::sync::Arc;

use crate::shared::infrastructure::clock::FixedClock;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

fn make_schema() -> AppSchema {
    schema(AppState::in_memory(Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ))))
}

#[tokio::test]
async fn submit_then_query_the_dashboard() {
    let schema = make_schema();

    let submitted = schema
        .execute(
            r#"mutation {
                submitCheckIn(employeeId: "E0001", shift: "morning", points: 1.5, memo: " ok ") {
                    date shift group points memo
                }
            }"#,
        )
        .await;
    assert!(submitted.errors.is_empty(), "{:?}", submitted.errors);
    let data = submitted.data.into_json().unwrap();
    assert_eq!(data["submitCheckIn"]["date"], "2024-06-03");
    assert_eq!(data["submitCheckIn"]["shift"], "morning");
    assert_eq!(data["submitCheckIn"]["group"], "A");
    assert_eq!(data["submitCheckIn"]["points"], 1.5);
    assert_eq!(data["submitCheckIn"]["memo"], "ok");

    let dashboard = schema
        .execute(
            r#"{
                dashboard(preset: "today") {
                    totalCount
                    totalPoints
                    byDate { date count }
                    byGroup { group count points }
                    byEmployee { displayName count points }
                }
            }"#,
        )
        .await;
    assert!(dashboard.errors.is_empty(), "{:?}", dashboard.errors);
    let data = dashboard.data.into_json().unwrap();
    assert_eq!(data["dashboard"]["totalCount"], 1);
    assert_eq!(
        data["dashboard"]["byDate"],
        serde_json::json!([{"date": "2024-06-03", "count": 1}])
    );
    assert_eq!(data["dashboard"]["byEmployee"][0]["displayName"], "Taro Yamada");
    assert_eq!(data["dashboard"]["byEmployee"][0]["points"], 1.5);
    assert_eq!(data["dashboard"]["totalPoints"], 1.5);
    assert_eq!(
        data["dashboard"]["byGroup"],
        serde_json::json!([{"group": "A", "count": 1, "points": 1.5}])
    );
}

#[tokio::test]
async fn negative_points_are_a_graphql_error() {
    let response = make_schema()
        .execute(
            r#"mutation {
                submitCheckIn(employeeId: "E0001", shift: "morning", points: -1) { entryId }
            }"#,
        )
        .await;

    assert_eq!(
        response.errors[0].message,
        "points must be a finite number of at least 0, got -1"
    );
}

#[tokio::test]
async fn a_duplicate_submission_is_a_graphql_error() {
    let schema = make_schema();
    let mutation = r#"mutation {
        submitCheckIn(employeeId: "E0002", date: "2024-06-01", shift: "evening") { entryId }
    }"#;

    assert!(schema.execute(mutation).await.errors.is_empty());
    let second = schema.execute(mutation).await;

    assert_eq!(
        second.errors[0].message,
        "check-in already recorded for E0002 on 2024-06-01 (evening)"
    );
}

#[tokio::test]
async fn a_reversed_custom_range_is_a_graphql_error() {
    let response = make_schema()
        .execute(
            r#"{
                dashboard(preset: "custom", start: "2024-06-10", end: "2024-06-01") { totalCount }
            }"#,
        )
        .await;

    assert_eq!(
        response.errors[0].message,
        "start date 2024-06-10 is after end date 2024-06-01"
    );
}

#[tokio::test]
async fn locking_a_month_through_graphql() {
    let schema = make_schema();

    let locked = schema.execute(r#"mutation { lockMonth(month: "2024-06") }"#).await;
    assert!(locked.errors.is_empty(), "{:?}", locked.errors);
    let status = schema.execute(r#"{ monthLocked(month: "2024-06") }"#).await;
    assert_eq!(status.data.into_json().unwrap()["monthLocked"], true);

    let rejected = schema
        .execute(r#"mutation { submitCheckIn(employeeId: "E0001", shift: "morning") { entryId } }"#)
        .await;
    assert_eq!(rejected.errors[0].message, "month 2024-06 is closed for check-ins");
}

#[tokio::test]
async fn employees_lists_the_roster() {
    let response = make_schema()
        .execute("{ employees { employeeId displayName group } }")
        .await;
    let data = response.data.into_json().unwrap();

    assert_eq!(data["employees"].as_array().unwrap().len(), 5);
    assert_eq!(data["employees"][4]["employeeId"], "E0005");
    assert_eq!(data["employees"][4]["group"], "C");
}
