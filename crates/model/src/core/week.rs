use crate::error::ModelError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// First day of a calendar week, used when truncating to week boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekStart(Weekday);

impl WeekStart {
    pub const SUNDAY: WeekStart = WeekStart(Weekday::Sun);
    pub const MONDAY: WeekStart = WeekStart(Weekday::Mon);

    pub fn weekday(&self) -> Weekday {
        self.0
    }

    /// Days to step back from `day` to reach the most recent week start.
    pub fn days_since(&self, day: Weekday) -> u64 {
        let from = day.num_days_from_sunday();
        let start = self.0.num_days_from_sunday();
        u64::from((from + 7 - start) % 7)
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::SUNDAY
    }
}

impl FromStr for WeekStart {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Weekday>()
            .map(WeekStart)
            .map_err(|_| ModelError::InvalidWeekStart(s.to_string()))
    }
}

impl TryFrom<String> for WeekStart {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekStart> for String {
    fn from(value: WeekStart) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sunday() {
        assert_eq!(WeekStart::default().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Monday".parse::<WeekStart>(), Ok(WeekStart::MONDAY));
        assert_eq!("sun".parse::<WeekStart>(), Ok(WeekStart::SUNDAY));
        assert!(matches!(
            "someday".parse::<WeekStart>(),
            Err(ModelError::InvalidWeekStart(_))
        ));
    }

    #[test]
    fn test_days_since() {
        assert_eq!(WeekStart::SUNDAY.days_since(Weekday::Sun), 0);
        assert_eq!(WeekStart::SUNDAY.days_since(Weekday::Wed), 3);
        assert_eq!(WeekStart::MONDAY.days_since(Weekday::Sun), 6);
        assert_eq!(WeekStart::MONDAY.days_since(Weekday::Tue), 1);
    }

    #[test]
    fn test_serde_as_lowercase_name() {
        let json = serde_json::to_string(&WeekStart::MONDAY).unwrap();
        assert_eq!(json, "\"monday\"");
        let parsed: WeekStart = serde_json::from_str("\"Saturday\"").unwrap();
        assert_eq!(parsed.weekday(), Weekday::Sat);
        assert!(serde_json::from_str::<WeekStart>("\"blursday\"").is_err());
    }
}
