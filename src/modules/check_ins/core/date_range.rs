use chrono::NaiveDate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidRangeError {
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    #[error("a custom range needs both a start and an end date")]
    MissingBounds,

    #[error("range around {0} falls outside the supported calendar")]
    OutOfCalendar(NaiveDate),
}

/// Half-open `[start, end)` range of calendar dates. `start == end` is the empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Two adjacent ranges `[start, at)` and `[at, end)`.
    /// `None` when `at` is outside `[start, end]`.
    pub fn split_at(&self, at: NaiveDate) -> Option<(DateRange, DateRange)> {
        if at < self.start || at > self.end {
            return None;
        }
        Some((
            DateRange {
                start: self.start,
                end: at,
            },
            DateRange { start: at, end: self.end },
        ))
    }
}
