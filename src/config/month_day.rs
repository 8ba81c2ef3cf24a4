//! Year-agnostic `MM-DD` calendar boundaries.
//!
//! The summer window is configured as two month/day pairs without a year
//! (`"06-01"`, `"09-01"`). [`MonthDay`] is the parsed form: validated on
//! construction, ordered by month then day, and resolvable into a concrete
//! [`NaiveDate`] for a given year when the resolver compares it against
//! "today".

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a string failed to parse as a [`MonthDay`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthDayError {
    /// Input was not two digits, a dash, and two digits.
    #[error("expected MM-DD, got '{0}'")]
    Format(String),

    /// Month component outside 1-12.
    #[error("month {0} is out of range 1-12")]
    MonthOutOfRange(u32),

    /// Day component not valid for the given month.
    ///
    /// Validity is checked against a leap year, so `02-29` is accepted.
    #[error("day {day} is not valid for month {month}")]
    DayOutOfRange {
        /// Month component of the rejected pair
        month: u32,
        /// Day component of the rejected pair
        day: u32,
    },
}

/// A calendar month/day pair with no year attached.
///
/// Serializes as the `MM-DD` string it was configured as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a `MonthDay`, validating that the pair names a real calendar
    /// day. Feb 29 is valid (checked against a leap year).
    pub fn new(month: u32, day: u32) -> Result<Self, MonthDayError> {
        if !(1..=12).contains(&month) {
            return Err(MonthDayError::MonthOutOfRange(month));
        }
        // 2000 is a leap year, so 02-29 passes and nothing else extra does.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(MonthDayError::DayOutOfRange { month, day });
        }
        Ok(Self { month, day })
    }

    /// Month component, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day component, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Resolves this boundary to a concrete date in `year`.
    ///
    /// Feb 29 resolved in a non-leap year overflows to Mar 1, the way
    /// component-wise date reconstruction rolls an out-of-range day into
    /// the next month.
    pub fn resolve(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day).unwrap_or_else(|| {
            let first = NaiveDate::from_ymd_opt(year, self.month, 1)
                .expect("month validated in MonthDay::new");
            first + Days::new(u64::from(self.day - 1))
        })
    }
}

impl FromStr for MonthDay {
    type Err = MonthDayError;

    /// Parses the strict `MM-DD` form: exactly two digits, `-`, two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .split_once('-')
            .filter(|(m, d)| {
                m.len() == 2
                    && d.len() == 2
                    && m.bytes().all(|b| b.is_ascii_digit())
                    && d.bytes().all(|b| b.is_ascii_digit())
            })
            .ok_or_else(|| MonthDayError::Format(s.to_string()))?;
        // Components are two ASCII digits, so the parses cannot fail.
        Self::new(month.parse().unwrap_or(0), day.parse().unwrap_or(0))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = MonthDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}
