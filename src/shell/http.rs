use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use std::fmt::Display;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::check_ins::use_cases::export_check_ins::inbound::http as export_http;
use crate::modules::check_ins::use_cases::list_employees::inbound::http as employees_http;
use crate::modules::check_ins::use_cases::manage_month_locks::inbound::http as month_locks_http;
use crate::modules::check_ins::use_cases::submit_check_in::inbound::http as submit_http;
use crate::modules::check_ins::use_cases::summarize_period::inbound::http as dashboard_http;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, err: impl Display) -> Response {
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/check-ins", post(submit_http::handle))
        .route("/check-ins/export", get(export_http::handle))
        .route("/dashboard", get(dashboard_http::handle))
        .route("/employees", get(employees_http::handle))
        .route(
            "/month-locks/{month}",
            put(month_locks_http::lock)
                .delete(month_locks_http::unlock)
                .get(month_locks_http::status),
        )
        .with_state(state)
}

/// REST routes plus `/gql`, with request tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
