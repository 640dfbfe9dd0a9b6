// CSV encoding of stored check-ins.
//
// Purpose
// - Produce a backup file that spreadsheet tools open without an import dialog.
//
// Responsibilities
// - Fix the column order and write a header row even when there are no rows.
// - Prefix a UTF-8 byte order mark so non-ASCII names and memos render correctly.

use chrono::SecondsFormat;

use crate::modules::check_ins::core::shift_entry::ShiftEntry;

pub const HEADER: [&str; 8] = [
    "entry_id",
    "date",
    "shift",
    "employee_id",
    "group",
    "points",
    "memo",
    "recorded_at",
];

const BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn encode(entries: &[ShiftEntry]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(BOM.to_vec());
    writer.write_record(HEADER)?;
    for entry in entries {
        writer.write_record([
            entry.entry_id.to_string(),
            entry.date.to_string(),
            entry.shift.to_string(),
            entry.employee_id.clone(),
            entry.group.clone(),
            entry.points.to_string(),
            entry.memo.clone().unwrap_or_default(),
            entry.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
