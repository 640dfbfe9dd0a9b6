// Command data type for submitting a check-in.
//
// Purpose
// - Express that an employee worked a shift on a date, with the points earned for it.
//
// Responsibilities
// - Carry already-parsed input. Transport details (JSON, GraphQL) stay in the inbound adapters.

use chrono::NaiveDate;

use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::core::shift_entry::{NewShiftEntry, ShiftKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCheckIn {
    pub employee_id: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub points: Points,
    pub memo: Option<String>,
}

impl SubmitCheckIn {
    pub fn key(&self) -> ShiftKey {
        ShiftKey {
            date: self.date,
            shift: self.shift,
            employee_id: self.employee_id.clone(),
        }
    }

    /// Attaches the employee's current group.
    pub fn into_entry(self, group: String) -> NewShiftEntry {
        NewShiftEntry {
            employee_id: self.employee_id,
            group,
            date: self.date,
            shift: self.shift,
            points: self.points,
            memo: self.memo,
        }
    }
}

/// Trims a free-text memo. Blank input is stored as no memo.
pub fn clean_memo(raw: Option<String>) -> Option<String> {
    raw.map(|memo| memo.trim().to_string())
        .filter(|memo| !memo.is_empty())
}
