use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::check_ins::core::date_range::DateRange;
use crate::shared::infrastructure::clock::FixedClock;
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::roster::Employee;
use crate::shared::infrastructure::roster::in_memory::InMemoryRoster;
use crate::shared::infrastructure::sqlite::SqliteStore;
use crate::shell::http::app;
use crate::shell::state::AppState;

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn two_employee_roster() -> InMemoryRoster {
    InMemoryRoster::from_employees(vec![
        Employee {
            employee_id: "E1".into(),
            display_name: "First Employee".into(),
            group: "North".into(),
        },
        Employee {
            employee_id: "E2".into(),
            display_name: "Second Employee".into(),
            group: "South".into(),
        },
    ])
    .unwrap()
}

async fn sqlite_app() -> (Router, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());
    let state = AppState::new(
        store.clone(),
        store.clone(),
        Arc::new(two_employee_roster()),
        Arc::new(FixedClock(day(6, 3))),
    );
    (app(state), store)
}

fn request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn submitting_the_same_check_in_twice_keeps_one_record() {
    let (router, store) = sqlite_app().await;
    let body = r#"{"employee_id":"E1","date":"2024-06-01","shift":"morning"}"#;

    let first = router
        .clone()
        .oneshot(request("POST", "/check-ins", body))
        .await
        .unwrap();
    let second = router
        .oneshot(request("POST", "/check-ins", body))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let june = DateRange::new(day(6, 1), day(7, 1)).unwrap();
    assert_eq!(store.list(june).await.unwrap().len(), 1);
}

#[tokio::test]
async fn a_locked_month_rejects_check_ins_until_it_is_unlocked() {
    let (router, store) = sqlite_app().await;
    let body = r#"{"employee_id":"E2","date":"2024-05-31","shift":"evening"}"#;

    let locked = router
        .clone()
        .oneshot(request("PUT", "/month-locks/2024-05", ""))
        .await
        .unwrap();
    assert_eq!(locked.status(), StatusCode::NO_CONTENT);

    let rejected = router
        .clone()
        .oneshot(request("POST", "/check-ins", body))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::LOCKED);

    let unlocked = router
        .clone()
        .oneshot(request("DELETE", "/month-locks/2024-05", ""))
        .await
        .unwrap();
    assert_eq!(unlocked.status(), StatusCode::NO_CONTENT);

    let accepted = router
        .oneshot(request("POST", "/check-ins", body))
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::CREATED);
    let may = DateRange::new(day(5, 1), day(6, 1)).unwrap();
    assert_eq!(store.list(may).await.unwrap().len(), 1);
}

#[tokio::test]
async fn an_unknown_employee_is_not_recorded() {
    let (router, store) = sqlite_app().await;
    let body = r#"{"employee_id":"E3","shift":"morning"}"#;

    let response = router
        .oneshot(request("POST", "/check-ins", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let june = DateRange::new(day(6, 1), day(7, 1)).unwrap();
    assert!(store.list(june).await.unwrap().is_empty());
}

#[tokio::test]
async fn a_check_in_keeps_the_group_it_was_recorded_under() {
    let (router, store) = sqlite_app().await;
    let body = r#"{"employee_id":"E2","date":"2024-06-02","shift":"afternoon","points":2}"#;

    let response = router
        .oneshot(request("POST", "/check-ins", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let june = DateRange::new(day(6, 1), day(7, 1)).unwrap();
    let stored = store.list(june).await.unwrap();
    assert_eq!(stored[0].group, "South");
    assert_eq!(stored[0].points.value(), 2.0);
}

#[tokio::test]
async fn the_export_contains_what_was_submitted() {
    let (router, _store) = sqlite_app().await;
    let bodies = [
        r#"{"employee_id":"E1","date":"2024-06-01","shift":"morning","points":1,"memo":"a, b"}"#,
        r#"{"employee_id":"E2","date":"2024-06-04","shift":"evening","points":0.5}"#,
    ];
    for body in bodies {
        let response = router
            .clone()
            .oneshot(request("POST", "/check-ins", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .oneshot(request("GET", "/check-ins/export?start=2024-06-01", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains(",2024-06-04,evening,E2,South,0.5,,"));
    assert!(rows[1].contains(r#",2024-06-01,morning,E1,North,1,"a, b","#));
}
