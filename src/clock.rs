//! Wall-clock text for the status bar and lock screen.
//!
//! The controller itself never reads a clock. The host samples local time
//! once per frame and formats it here into fixed-capacity strings.

use core::fmt::Write;

use chrono::NaiveDateTime;
use heapless::String;

/// Pre-formatted time and date strings.
#[derive(Clone, Debug, Default)]
pub struct ClockText {
    /// `HH:MM`, 24-hour.
    pub time: String<8>,
    /// `Weekday, Month D`.
    pub date: String<32>,
}

impl ClockText {
    pub fn new(now: &NaiveDateTime) -> Self {
        let mut time = String::new();
        let mut date = String::new();
        let _ = write!(time, "{}", now.format("%H:%M"));
        let _ = write!(date, "{}", now.format("%A, %B %-d"));
        Self { time, date }
    }

    /// Current local time.
    pub fn now() -> Self {
        Self::new(&chrono::Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn test_time_is_zero_padded_24h() {
        let clock = ClockText::new(&at(2024, 3, 5, 7, 4));
        assert_eq!(clock.time.as_str(), "07:04");

        let clock = ClockText::new(&at(2024, 3, 5, 21, 45));
        assert_eq!(clock.time.as_str(), "21:45");
    }

    #[test]
    fn test_date_format() {
        let clock = ClockText::new(&at(2024, 3, 5, 12, 0));
        assert_eq!(clock.date.as_str(), "Tuesday, March 5");
    }

    #[test]
    fn test_longest_date_fits() {
        let clock = ClockText::new(&at(2021, 9, 29, 0, 0));
        assert_eq!(clock.date.as_str(), "Wednesday, September 29");
    }
}
