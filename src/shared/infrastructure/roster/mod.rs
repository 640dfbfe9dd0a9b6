// Read-only employee roster.
//
// Purpose
// - Resolve employee ids supplied by callers to known employees.
//
// Boundaries
// - The roster is reference data owned elsewhere. Nothing in this crate writes to it.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub display_name: String,
    /// Team the employee reports to. Copied onto each check-in when it is recorded.
    pub group: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("employee not found: {0}")]
    NotFound(String),

    #[error("roster unavailable: {0}")]
    Unavailable(String),

    #[error("invalid roster: {0}")]
    Invalid(String),
}

#[async_trait]
pub trait Roster: Send + Sync {
    async fn lookup(&self, employee_id: &str) -> Result<Employee, RosterError>;

    /// All employees, sorted by employee id.
    async fn list(&self) -> Result<Vec<Employee>, RosterError>;

    /// Employee id to display name. Empty when the roster cannot be read.
    async fn display_names(&self) -> HashMap<String, String> {
        match self.list().await {
            Ok(employees) => employees
                .into_iter()
                .map(|e| (e.employee_id, e.display_name))
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "roster unavailable, showing ids only");
                HashMap::new()
            }
        }
    }
}

pub mod in_memory;
