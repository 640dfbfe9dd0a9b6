use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use uuid::Uuid;

use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;

/// Uniqueness key of a check-in: no two stored entries share all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct ShiftKey {
    pub date: NaiveDate,
    pub shift: Shift,
    pub employee_id: String,
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} ({})", self.employee_id, self.date, self.shift)
    }
}

/// A check-in as submitted, before the store has accepted it.
///
/// `group` is the employee's group at submission time. Later roster edits do
/// not rewrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShiftEntry {
    pub employee_id: String,
    pub group: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub points: Points,
    pub memo: Option<String>,
}

impl NewShiftEntry {
    pub fn key(&self) -> ShiftKey {
        ShiftKey {
            date: self.date,
            shift: self.shift,
            employee_id: self.employee_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftEntry {
    pub entry_id: Uuid,
    pub employee_id: String,
    pub group: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub points: Points,
    pub memo: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl ShiftEntry {
    pub fn record(candidate: NewShiftEntry, recorded_at: DateTime<Utc>) -> Self {
        Self {
            entry_id: Uuid::now_v7(),
            employee_id: candidate.employee_id,
            group: candidate.group,
            date: candidate.date,
            shift: candidate.shift,
            points: candidate.points,
            memo: candidate.memo,
            recorded_at,
        }
    }

    pub fn key(&self) -> ShiftKey {
        ShiftKey {
            date: self.date,
            shift: self.shift,
            employee_id: self.employee_id.clone(),
        }
    }
}
