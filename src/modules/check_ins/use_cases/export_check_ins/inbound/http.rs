use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::check_ins::use_cases::export_check_ins::handler::ExportError;
use crate::modules::check_ins::use_cases::export_check_ins::query::ExportCheckIns;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Response {
    let query = ExportCheckIns {
        start: params.start,
        end: params.end,
    };

    match state.export_handler.handle(query).await {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"check-ins.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e @ ExportError::InvalidRange(_)) => error_response(StatusCode::BAD_REQUEST, e),
        Err(e @ ExportError::StorageUnavailable(_)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, e)
        }
        Err(e @ ExportError::Encoding(_)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}
