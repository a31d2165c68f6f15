use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Canonical period units a date filter can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Days,
    Weeks,
    Months,
    Quarters,
    Years,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Days,
        Period::Weeks,
        Period::Months,
        Period::Quarters,
        Period::Years,
    ];

    /// Map a raw unit spelling (`day`, `DAYS`, `D`, `month`, `Q`, ...) onto a
    /// canonical period. Anything unrecognised is "no signal" rather than an error.
    pub fn normalize(raw: &str) -> Option<Period> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" | "days" | "d" => Some(Period::Days),
            "week" | "weeks" | "w" => Some(Period::Weeks),
            "month" | "months" | "m" => Some(Period::Months),
            "quarter" | "quarters" | "q" => Some(Period::Quarters),
            "year" | "years" | "y" => Some(Period::Years),
            _ => None,
        }
    }

    /// Approximate length of one period in seconds.
    ///
    /// Only used to order candidate periods against each other, never for
    /// calendar arithmetic (see [`crate::core::calendar`]).
    pub fn duration_seconds(self) -> u64 {
        match self {
            Period::Days => 86_400,
            Period::Weeks => 604_800,
            Period::Months => 2_592_000,
            Period::Quarters => 1_036_800,
            Period::Years => 31_536_000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Days => "days",
            Period::Weeks => "weeks",
            Period::Months => "months",
            Period::Quarters => "quarters",
            Period::Years => "years",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::normalize(s).ok_or_else(|| ModelError::UnknownPeriod(s.to_string()))
    }
}

/// A period together with an optional explicit count, e.g. `90 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    pub period: Period,
    pub count: Option<u32>,
}

impl PeriodSpan {
    pub fn new(period: Period, count: Option<u32>) -> Self {
        Self { period, count }
    }

    /// Build a span from a signed amount. The sign only matters for anchor
    /// arithmetic, so the count keeps the magnitude; zero carries no count.
    pub fn from_signed(period: Period, amount: Option<i64>) -> Self {
        let count = amount
            .map(i64::unsigned_abs)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok());
        Self::new(period, count)
    }

    /// Total length used for ordering; a missing count weighs as one period.
    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.count.unwrap_or(1)) * self.period.duration_seconds()
    }
}
