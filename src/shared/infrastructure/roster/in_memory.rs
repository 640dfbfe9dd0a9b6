use std::collections::BTreeMap;
use std::path::Path;

use crate::shared::infrastructure::roster::{Employee, Roster, RosterError};

pub struct InMemoryRoster {
    employees: BTreeMap<String, Employee>,
}

impl InMemoryRoster {
    /// Fails when two employees share an id or an employee has no group.
    pub fn from_employees(employees: Vec<Employee>) -> Result<Self, RosterError> {
        let mut by_id = BTreeMap::new();
        for employee in employees {
            let employee_id = employee.employee_id.trim().to_string();
            if employee_id.is_empty() {
                return Err(RosterError::Invalid("employee id must not be empty".into()));
            }
            if by_id.contains_key(&employee_id) {
                return Err(RosterError::Invalid(format!(
                    "duplicate employee id {employee_id}"
                )));
            }
            let group = employee.group.trim().to_string();
            if group.is_empty() {
                return Err(RosterError::Invalid(format!(
                    "employee {employee_id} has no group"
                )));
            }
            by_id.insert(
                employee_id.clone(),
                Employee {
                    employee_id,
                    display_name: employee.display_name.trim().to_string(),
                    group,
                },
            );
        }
        Ok(Self { employees: by_id })
    }

    /// Reads a JSON array of `{"employee_id", "display_name", "group"}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self, RosterError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RosterError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, RosterError> {
        let employees: Vec<Employee> =
            serde_json::from_str(raw).map_err(|e| RosterError::Invalid(e.to_string()))?;
        Self::from_employees(employees)
    }

    /// Five placeholder employees for a fresh install.
    pub fn sample() -> Self {
        let employees = [
            ("E0001", "Taro Yamada", "A"),
            ("E0002", "Hanako Sato", "A"),
            ("E0003", "Jiro Suzuki", "B"),
            ("E0004", "Mina Tanaka", "B"),
            ("E0005", "Shiro Takahashi", "C"),
        ]
        .into_iter()
        .map(|(employee_id, display_name, group)| {
            (
                employee_id.to_string(),
                Employee {
                    employee_id: employee_id.to_string(),
                    display_name: display_name.to_string(),
                    group: group.to_string(),
                },
            )
        })
        .collect();
        Self { employees }
    }
}

#[async_trait::async_trait]
impl Roster for InMemoryRoster {
    async fn lookup(&self, employee_id: &str) -> Result<Employee, RosterError> {
        self.employees
            .get(employee_id)
            .cloned()
            .ok_or_else(|| RosterError::NotFound(employee_id.to_string()))
    }

    async fn list(&self) -> Result<Vec<Employee>, RosterError> {
        Ok(self.employees.values().cloned().collect())
    }
}
