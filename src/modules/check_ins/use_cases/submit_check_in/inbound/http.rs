use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::use_cases::submit_check_in::command::{SubmitCheckIn, clean_memo};
use crate::modules::check_ins::use_cases::submit_check_in::handler::SubmitError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitCheckInBody {
    pub employee_id: String,
    /// Defaults to today.
    pub date: Option<NaiveDate>,
    pub shift: Shift,
    /// Defaults to 0. Negative values are rejected while parsing the body.
    #[serde(default)]
    pub points: Points,
    pub memo: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitCheckInBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = SubmitCheckIn {
        employee_id: body.employee_id.trim().to_string(),
        date: body.date.unwrap_or_else(|| state.clock.today()),
        shift: body.shift,
        points: body.points,
        memo: clean_memo(body.memo),
    };

    match state.submit_handler.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e @ SubmitError::Duplicate(_)) => error_response(StatusCode::CONFLICT, e),
        Err(e @ SubmitError::EmployeeNotFound(_)) => error_response(StatusCode::NOT_FOUND, e),
        Err(e @ SubmitError::MonthLocked(_)) => error_response(StatusCode::LOCKED, e),
        Err(e @ SubmitError::StorageUnavailable(_)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, e)
        }
    }
}
