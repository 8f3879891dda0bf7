//! Minute-of-day time handling.
//!
//! Schedules in this system are day-local: every time is a minute count
//! since midnight, and all arithmetic wraps at 24 hours. The persistence
//! layer exchanges times as zero-padded "HH:MM" strings.

use std::cmp::Ordering;
use std::fmt;

use chrono::Duration;

use super::InputError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wraparound minute-of-day value.
///
/// Always holds a minute count in `[0, 1439]`; construction and every
/// arithmetic operation normalize modulo 1440, with negative results
/// wrapped forward. Ordering is by minute count, so 23:59 compares
/// greater than 00:00 — there is no day component.
///
/// # Examples
///
/// ```
/// use transit_core::domain::DayTime;
///
/// let t = DayTime::parse("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // Arithmetic wraps at midnight.
/// let late = DayTime::parse("23:50").unwrap();
/// assert_eq!(late.plus_minutes(20).to_string(), "00:10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTime(u16);

impl DayTime {
    /// 00:00.
    pub const MIDNIGHT: DayTime = DayTime(0);

    /// Builds a time from an arbitrary minute count, wrapping into range.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_core::domain::DayTime;
    ///
    /// assert_eq!(DayTime::from_minutes(90).to_string(), "01:30");
    /// assert_eq!(DayTime::from_minutes(1440), DayTime::MIDNIGHT);
    /// assert_eq!(DayTime::from_minutes(-10).to_string(), "23:50");
    /// ```
    pub fn from_minutes(minutes: i64) -> Self {
        DayTime(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    /// Builds a time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InputError> {
        if hour > 23 {
            return Err(InputError::InvalidTime {
                reason: "hour must be 0-23",
            });
        }
        if minute > 59 {
            return Err(InputError::InvalidTime {
                reason: "minute must be 0-59",
            });
        }
        Ok(DayTime(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Parses a time from zero-padded "HH:MM" text.
    ///
    /// The input must be exactly five characters with a colon at index 2;
    /// anything else — wrong separator, out-of-range fields, trailing
    /// garbage — is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_core::domain::DayTime;
    ///
    /// assert!(DayTime::parse("00:00").is_ok());
    /// assert!(DayTime::parse("23:59").is_ok());
    ///
    /// assert!(DayTime::parse("9:30").is_err());
    /// assert!(DayTime::parse("09.30").is_err());
    /// assert!(DayTime::parse("24:00").is_err());
    /// assert!(DayTime::parse("09:30 ").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return Err(InputError::InvalidTime {
                reason: "expected HH:MM format",
            });
        }

        if bytes[2] != b':' {
            return Err(InputError::InvalidTime {
                reason: "expected colon at position 2",
            });
        }

        let hour = parse_two_digits(&bytes[0..2]).ok_or(InputError::InvalidTime {
            reason: "invalid hour digits",
        })?;
        let minute = parse_two_digits(&bytes[3..5]).ok_or(InputError::InvalidTime {
            reason: "invalid minute digits",
        })?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Returns the minute count since midnight (0-1439).
    pub fn total_minutes(&self) -> u16 {
        self.0
    }

    /// Adds a (possibly negative) number of minutes, wrapping at 24h.
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self::from_minutes(i64::from(self.0) + minutes)
    }

    /// Returns the forward minute distance from `earlier` to `self`.
    ///
    /// Always in `[0, 1439]`: when `self` compares less than `earlier`
    /// the distance wraps past midnight. A journey spanning midnight
    /// therefore reports its wrapped duration, not a day-aware one.
    pub fn minutes_since(&self, earlier: DayTime) -> i64 {
        (i64::from(self.0) - i64::from(earlier.0)).rem_euclid(MINUTES_PER_DAY)
    }

    /// Returns the forward distance from `earlier` as a duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Duration;
    /// use transit_core::domain::DayTime;
    ///
    /// let dep = DayTime::parse("08:00").unwrap();
    /// let arr = DayTime::parse("08:14").unwrap();
    /// assert_eq!(arr.duration_since(dep), Duration::minutes(14));
    /// ```
    pub fn duration_since(&self, earlier: DayTime) -> Duration {
        Duration::minutes(self.minutes_since(earlier))
    }
}

impl Ord for DayTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for DayTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u8.
fn parse_two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some((d1 * 10 + d2) as u8)
}
