use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::check_ins::use_cases::list_employees::inbound::graphql::EmployeesQuery;
use crate::modules::check_ins::use_cases::manage_month_locks::inbound::graphql::{
    MonthLockMutation, MonthLockQuery,
};
use crate::modules::check_ins::use_cases::submit_check_in::inbound::graphql::SubmitCheckInMutation;
use crate::modules::check_ins::use_cases::summarize_period::inbound::graphql::DashboardQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(DashboardQuery, EmployeesQuery, MonthLockQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitCheckInMutation, MonthLockMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
