use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid time of day: {0}")]
pub struct ParseTimeError(String);

/// Wall-clock time normalized to minutes since midnight.
///
/// Both 24-hour ("17:00") and 12-hour ("5:00 PM") text forms parse to the
/// same value. "24:00" is accepted as the end-of-day bound so a booking can
/// run until midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

pub const MINUTES_PER_DAY: u16 = 24 * 60;

impl TimeOfDay {
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        let minutes = hour * 60 + minute;
        (minute < 60 && minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes.min(MINUTES_PER_DAY))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();

        let (body, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest.trim_end(), Some(Meridiem::Am))
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest.trim_end(), Some(Meridiem::Pm))
        } else {
            (upper.as_str(), None)
        };

        let (h, m) = body.split_once(':').ok_or_else(err)?;
        let hour: u16 = h.trim().parse().map_err(|_| err())?;
        let minute: u16 = m.trim().parse().map_err(|_| err())?;
        if minute >= 60 {
            return Err(err());
        }

        let hour = match meridiem {
            // Hour 12 wraps: 12 AM is midnight, 12 PM stays noon.
            Some(Meridiem::Am) if (1..=12).contains(&hour) => hour % 12,
            Some(Meridiem::Pm) if (1..=12).contains(&hour) => hour % 12 + 12,
            None if hour < 24 => hour,
            // End-of-day bound.
            None if hour == 24 && minute == 0 => 24,
            _ => return Err(err()),
        };

        Ok(Self(hour * 60 + minute))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

enum Meridiem {
    Am,
    Pm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn twelve_and_twenty_four_hour_forms_agree() {
        assert_eq!(parse("09:00 AM"), parse("09:00"));
        assert_eq!(parse("5:00 PM"), parse("17:00"));
        assert_eq!(parse("5:30pm"), parse("17:30"));
        assert_eq!(parse("11:45 am"), parse("11:45"));
    }

    #[test]
    fn hour_twelve_wraps() {
        assert_eq!(parse("12:00 AM").minutes(), 0);
        assert_eq!(parse("12:00 PM").minutes(), 12 * 60);
        assert_eq!(parse("12:30 AM").minutes(), 30);
    }

    #[test]
    fn end_of_day_bound() {
        assert_eq!(parse("24:00").minutes(), MINUTES_PER_DAY);
        assert!("24:01".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn rejects_unparseable_input() {
        for s in ["", "noon", "25:00", "10:99", "10", "10:00 XM", "13:00 PM"] {
            assert!(s.parse::<TimeOfDay>().is_err(), "{s} should be rejected");
        }
    }

    #[test]
    fn display_is_twenty_four_hour() {
        assert_eq!(parse("5:07 PM").to_string(), "17:07");
        assert_eq!(parse("12:00 AM").to_string(), "00:00");
    }
}
