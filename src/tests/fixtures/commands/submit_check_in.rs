// Shared test fixture for the SubmitCheckIn command.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift::Shift;
use crate::modules::check_ins::use_cases::submit_check_in::command::SubmitCheckIn;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitCheckInDto {
    pub employee_id: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub points: Points,
    pub memo: Option<String>,
}

pub struct SubmitCheckInBuilder {
    inner: SubmitCheckIn,
}

impl Default for SubmitCheckInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitCheckInBuilder {
    pub fn new() -> Self {
        let dto: SubmitCheckInDto =
            serde_json::from_str(include_str!("json/submit_check_in.json")).unwrap();

        Self {
            inner: SubmitCheckIn {
                employee_id: dto.employee_id,
                date: dto.date,
                shift: dto.shift,
                points: dto.points,
                memo: dto.memo,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn shift(mut self, v: Shift) -> Self {
        self.inner.shift = v;
        self
    }

    pub fn points(mut self, v: f64) -> Self {
        self.inner.points = Points::new(v).unwrap();
        self
    }

    pub fn memo(mut self, v: impl Into<String>) -> Self {
        self.inner.memo = Some(v.into());
        self
    }

    pub fn build(self) -> SubmitCheckIn {
        self.inner
    }
}

#[cfg(test)]
mod submit_check_in_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitCheckInBuilder::default().build();
        assert_eq!(built.employee_id, "E0001");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(built.shift, Shift::Morning);
        assert_eq!(built.points.value(), 1.0);
        assert_eq!(built.memo, None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SubmitCheckInBuilder::new()
            .employee_id("E0004")
            .date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .shift(Shift::Afternoon)
            .points(2.5)
            .memo("covered lunch")
            .build();

        assert_eq!(custom.employee_id, "E0004");
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(custom.shift, Shift::Afternoon);
        assert_eq!(custom.points.value(), 2.5);
        assert_eq!(custom.memo.as_deref(), Some("covered lunch"));
    }
}
