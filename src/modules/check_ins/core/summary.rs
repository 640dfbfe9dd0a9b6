use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::modules::check_ins::core::date_range::DateRange;
use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::core::shift_entry::ShiftEntry;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EmployeeTally {
    pub employee_id: String,
    pub count: usize,
    pub points: Points,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GroupTally {
    pub group: String,
    pub count: usize,
    pub points: Points,
}

/// Grouped view of the entries inside one range.
///
/// `by_date` and `by_shift` only hold keys with at least one entry. Empty dates
/// are not zero-filled. Groups come from the snapshot stored on each entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub range: DateRange,
    pub total_count: usize,
    pub total_points: Points,
    pub by_date: BTreeMap<NaiveDate, usize>,
    pub by_shift: BTreeMap<Shift, usize>,
    pub by_group: Vec<GroupTally>,
    pub by_employee: Vec<EmployeeTally>,
    pub entries: Vec<ShiftEntry>,
}

impl Summary {
    pub fn from_entries(range: DateRange, entries: Vec<ShiftEntry>) -> Self {
        let mut by_date = BTreeMap::new();
        let mut by_shift = BTreeMap::new();
        let mut per_group: HashMap<&str, (usize, Points)> = HashMap::new();
        let mut per_employee: HashMap<&str, (usize, Points)> = HashMap::new();
        for entry in &entries {
            *by_date.entry(entry.date).or_insert(0) += 1;
            *by_shift.entry(entry.shift).or_insert(0) += 1;
            tally(per_group.entry(entry.group.as_str()).or_default(), entry);
            tally(
                per_employee.entry(entry.employee_id.as_str()).or_default(),
                entry,
            );
        }

        let mut by_group: Vec<GroupTally> = per_group
            .into_iter()
            .map(|(group, (count, points))| GroupTally {
                group: group.to_string(),
                count,
                points,
            })
            .collect();
        by_group.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.group.cmp(&b.group)));

        // Points lead the ranking. Ties fall back to count, then id.
        let mut by_employee: Vec<EmployeeTally> = per_employee
            .into_iter()
            .map(|(employee_id, (count, points))| EmployeeTally {
                employee_id: employee_id.to_string(),
                count,
                points,
            })
            .collect();
        by_employee.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.count.cmp(&a.count))
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        Self {
            range,
            total_count: entries.len(),
            total_points: entries.iter().map(|entry| entry.points).sum(),
            by_date,
            by_shift,
            by_group,
            by_employee,
            entries,
        }
    }
}

fn tally(slot: &mut (usize, Points), entry: &ShiftEntry) {
    slot.0 += 1;
    slot.1 = slot.1 + entry.points;
}
