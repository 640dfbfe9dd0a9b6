use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::check_ins::core::year_month::YearMonth;
use crate::shared::infrastructure::month_locks::MonthLockStore;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct MonthLockStatus {
    pub month: String,
    pub locked: bool,
}

fn parse_month(raw: &str) -> Result<YearMonth, Response> {
    raw.parse::<YearMonth>()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))
}

pub async fn lock(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let month = match parse_month(&raw) {
        Ok(month) => month,
        Err(response) => return response,
    };
    match state.month_locks.lock(month).await {
        Ok(()) => {
            tracing::info!(%month, "month locked");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(StatusCode::SERVICE_UNAVAILABLE, e),
    }
}

pub async fn unlock(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let month = match parse_month(&raw) {
        Ok(month) => month,
        Err(response) => return response,
    };
    match state.month_locks.unlock(month).await {
        Ok(()) => {
            tracing::info!(%month, "month unlocked");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(StatusCode::SERVICE_UNAVAILABLE, e),
    }
}

pub async fn status(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let month = match parse_month(&raw) {
        Ok(month) => month,
        Err(response) => return response,
    };
    match state.month_locks.is_locked(month).await {
        Ok(locked) => Json(MonthLockStatus {
            month: month.to_string(),
            locked,
        })
        .into_response(),
        Err(e) => error_response(StatusCode::SERVICE_UNAVAILABLE, e),
    }
}
