use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::infrastructure::roster::Roster;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster.list().await {
        Ok(employees) => Json(employees).into_response(),
        Err(e) => error_response(StatusCode::SERVICE_UNAVAILABLE, e),
    }
}
