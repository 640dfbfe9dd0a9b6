use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Non-negative score attached to a check-in.
///
/// Construction rejects NaN, infinities and negatives, so the total order over
/// the inner float is safe to expose as `Ord`.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Points(f64);

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("points must be a finite number of at least 0, got {0}")]
pub struct InvalidPoints(pub f64);

impl Points {
    pub const ZERO: Points = Points(0.0);

    pub fn new(value: f64) -> Result<Self, InvalidPoints> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidPoints(value));
        }
        // -0.0 folds into 0.0 so equality agrees with the ordering below.
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Points {
    type Error = InvalidPoints;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Points::new(value)
    }
}

impl From<Points> for f64 {
    fn from(points: Points) -> Self {
        points.0
    }
}

impl PartialEq for Points {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Points {}

impl PartialOrd for Points {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Points {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Self) -> Self::Output {
        Points(self.0 + rhs.0)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
