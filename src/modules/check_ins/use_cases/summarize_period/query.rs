use chrono::NaiveDate;

use crate::modules::check_ins::core::period::PeriodPreset;

/// Dashboard request. `start` and `end` are only read for [`PeriodPreset::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummarizePeriod {
    pub preset: PeriodPreset,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SummarizePeriod {
    pub fn preset(preset: PeriodPreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            preset: PeriodPreset::Custom,
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn custom_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }
}
