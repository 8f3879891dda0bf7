//! Operating-day codes and weekly masks.
//!
//! Weekdays are numbered 1 (Monday) through 7 (Sunday). A route carries a
//! `DaySet` naming the weekdays it operates; the persistence layer
//! exchanges the set as a comma-separated code list such as `"1,2,5"`.

use std::fmt;

use super::InputError;

/// A validated weekday code, 1 (Monday) through 7 (Sunday).
///
/// # Examples
///
/// ```
/// use transit_core::domain::DayOfWeek;
///
/// let wed = DayOfWeek::new(3).unwrap();
/// assert_eq!(wed.code(), 3);
/// assert_eq!(wed.name(), "Wednesday");
///
/// assert!(DayOfWeek::new(0).is_err());
/// assert!(DayOfWeek::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const MONDAY: DayOfWeek = DayOfWeek(1);
    pub const TUESDAY: DayOfWeek = DayOfWeek(2);
    pub const WEDNESDAY: DayOfWeek = DayOfWeek(3);
    pub const THURSDAY: DayOfWeek = DayOfWeek(4);
    pub const FRIDAY: DayOfWeek = DayOfWeek(5);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);
    pub const SUNDAY: DayOfWeek = DayOfWeek(7);

    /// Validates a weekday code.
    ///
    /// # Errors
    ///
    /// Returns `InputError::WeekdayOutOfRange` unless `1 <= code <= 7`.
    pub fn new(code: u8) -> Result<Self, InputError> {
        if (1..=7).contains(&code) {
            Ok(DayOfWeek(code))
        } else {
            Err(InputError::WeekdayOutOfRange(code))
        }
    }

    /// Returns the numeric code (1-7).
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Returns the English day name.
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of weekdays on which a route operates.
///
/// Stored as a seven-bit mask. The list form used by persistence is the
/// ascending comma-separated codes, e.g. `"1,2,3,4,5"` for weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// All seven days.
    pub const EVERY_DAY: DaySet = DaySet(0b0111_1111);

    /// The empty set.
    pub fn empty() -> Self {
        DaySet(0)
    }

    /// Builds a set from raw weekday codes.
    ///
    /// # Errors
    ///
    /// Returns `InputError::WeekdayOutOfRange` on any code outside 1-7.
    pub fn from_codes(codes: &[u8]) -> Result<Self, InputError> {
        let mut set = DaySet::empty();
        for &code in codes {
            set.insert(DayOfWeek::new(code)?);
        }
        Ok(set)
    }

    /// Adds a day to the set.
    pub fn insert(&mut self, day: DayOfWeek) {
        self.0 |= 1 << (day.code() - 1);
    }

    /// Returns true if the set contains the day.
    pub fn contains(&self, day: DayOfWeek) -> bool {
        self.0 & (1 << (day.code() - 1)) != 0
    }

    /// Returns the number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no day is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the days in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        (1..=7u8)
            .map(DayOfWeek)
            .filter(move |day| self.contains(*day))
    }

    /// Parses the comma-separated list form, e.g. `"1,3,5"`.
    ///
    /// An empty string yields the empty set.
    ///
    /// # Errors
    ///
    /// Returns `InputError` on non-numeric entries or out-of-range codes.
    pub fn parse_list(text: &str) -> Result<Self, InputError> {
        if text.is_empty() {
            return Ok(DaySet::empty());
        }
        let mut set = DaySet::empty();
        for part in text.split(',') {
            let code: u8 = part.parse().map_err(|_| InputError::MalformedRecord {
                what: "day set",
                reason: format!("invalid day code {part:?}"),
            })?;
            set.insert(DayOfWeek::new(code)?);
        }
        Ok(set)
    }

    /// Renders the comma-separated list form in ascending code order.
    pub fn to_list(&self) -> String {
        let codes: Vec<String> = self.iter().map(|d| d.code().to_string()).collect();
        codes.join(",")
    }
}
