// Period resolver for the dashboard.
//
// Purpose
// - Turn a named preset into a concrete half-open date range.
//
// Responsibilities
// - Weeks start on Monday.
// - Months run from the 1st up to the 1st of the following month.
// - "today" is always passed in. Nothing here reads the wall clock.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::modules::check_ins::core::date_range::{DateRange, InvalidRangeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodPreset {
    Today,
    ThisWeek,
    #[default]
    ThisMonth,
    LastMonth,
    Custom,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown period preset: {0}")]
pub struct UnknownPreset(pub String);

impl PeriodPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodPreset::Today => "today",
            PeriodPreset::ThisWeek => "this_week",
            PeriodPreset::ThisMonth => "this_month",
            PeriodPreset::LastMonth => "last_month",
            PeriodPreset::Custom => "custom",
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(PeriodPreset::Today),
            "this_week" => Ok(PeriodPreset::ThisWeek),
            "this_month" => Ok(PeriodPreset::ThisMonth),
            "last_month" => Ok(PeriodPreset::LastMonth),
            "custom" => Ok(PeriodPreset::Custom),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

pub fn resolve(
    preset: PeriodPreset,
    today: NaiveDate,
    custom_bounds: Option<(NaiveDate, NaiveDate)>,
) -> Result<DateRange, InvalidRangeError> {
    let out_of_calendar = || InvalidRangeError::OutOfCalendar(today);
    match preset {
        PeriodPreset::Today => {
            let end = today.succ_opt().ok_or_else(out_of_calendar)?;
            DateRange::new(today, end)
        }
        PeriodPreset::ThisWeek => {
            let start = start_of_week(today).ok_or_else(out_of_calendar)?;
            let end = start
                .checked_add_days(Days::new(7))
                .ok_or_else(out_of_calendar)?;
            DateRange::new(start, end)
        }
        PeriodPreset::ThisMonth => {
            let start = first_of_month(today).ok_or_else(out_of_calendar)?;
            let end = start
                .checked_add_months(Months::new(1))
                .ok_or_else(out_of_calendar)?;
            DateRange::new(start, end)
        }
        PeriodPreset::LastMonth => {
            let end = first_of_month(today).ok_or_else(out_of_calendar)?;
            let start = end
                .checked_sub_months(Months::new(1))
                .ok_or_else(out_of_calendar)?;
            DateRange::new(start, end)
        }
        PeriodPreset::Custom => {
            let (start, end) = custom_bounds.ok_or(InvalidRangeError::MissingBounds)?;
            DateRange::new(start, end)
        }
    }
}

fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}
