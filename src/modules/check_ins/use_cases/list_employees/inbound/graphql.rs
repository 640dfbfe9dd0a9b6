use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::infrastructure::roster::{Employee, Roster};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEmployee {
    pub employee_id: String,
    pub display_name: String,
    pub group: String,
}

impl From<Employee> for GqlEmployee {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.employee_id,
            display_name: e.display_name,
            group: e.group,
        }
    }
}

#[derive(Default)]
pub struct EmployeesQuery;

#[Object]
impl EmployeesQuery {
    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.roster.list().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
