use chrono::NaiveDate;

use crate::modules::check_ins::core::date_range::{DateRange, InvalidRangeError};

/// Export request over `[start, end)`. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportCheckIns {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ExportCheckIns {
    pub fn range(&self) -> Result<DateRange, InvalidRangeError> {
        DateRange::new(
            self.start.unwrap_or(NaiveDate::MIN),
            self.end.unwrap_or(NaiveDate::MAX),
        )
    }
}
