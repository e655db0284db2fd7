//! The fixed daily slot grid and the date/time parsing that feeds it.
//!
//! The business day is 28 start times spaced 20 minutes apart, from 10:30 to
//! 19:30. Every booking starts on one of these values; anything else is an
//! input-format error rather than a scheduling decision.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{Result, SchedulingError};

/// Minutes since midnight of the first slot (10:30).
pub const FIRST_SLOT_MINUTE: u16 = 10 * 60 + 30;
/// Distance between consecutive slot starts.
pub const SLOT_STEP_MINUTES: u16 = 20;
/// Number of slots in a business day.
pub const SLOT_COUNT: usize = 28;
/// Minutes since midnight of the last slot (19:30).
pub const LAST_SLOT_MINUTE: u16 = FIRST_SLOT_MINUTE + (SLOT_COUNT as u16 - 1) * SLOT_STEP_MINUTES;
/// Latest minute a call may finish: one grid step past the last slot start.
pub const CLOSING_MINUTE: u16 = LAST_SLOT_MINUTE + SLOT_STEP_MINUTES;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A start time on the canonical grid, stored as minutes since midnight.
///
/// Values can only be obtained from [`slot_times`] or by parsing, so every
/// `SlotTime` is one of the 28 grid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(u16);

impl SlotTime {
    /// Parse an `HH:MM` string and check that it lands on the grid.
    ///
    /// # Errors
    /// Returns `SchedulingError::InvalidTime` for malformed strings and for
    /// well-formed times that are not grid values (e.g. `10:40`, `09:30`).
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || SchedulingError::InvalidTime(raw.to_string());
        if !has_shape(raw, "dd:dd") {
            return Err(invalid());
        }
        let time = NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| invalid())?;
        let minute = (time.hour() * 60 + time.minute()) as u16;
        Self::from_minute(minute).ok_or_else(invalid)
    }

    /// The grid slot starting at `minute` past midnight, if there is one.
    pub fn from_minute(minute: u16) -> Option<Self> {
        let on_grid = (FIRST_SLOT_MINUTE..=LAST_SLOT_MINUTE).contains(&minute)
            && (minute - FIRST_SLOT_MINUTE) % SLOT_STEP_MINUTES == 0;
        on_grid.then_some(SlotTime(minute))
    }

    /// Minutes since midnight.
    pub fn minute(self) -> u16 {
        self.0
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for SlotTime {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self> {
        SlotTime::parse(s)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All 28 grid slots in chronological order.
pub fn slot_times() -> impl Iterator<Item = SlotTime> {
    (0..SLOT_COUNT as u16).map(|i| SlotTime(FIRST_SLOT_MINUTE + i * SLOT_STEP_MINUTES))
}

/// Whether `raw` matches `pattern` byte for byte, where `d` stands for any
/// ASCII digit and every other byte must appear literally.
fn has_shape(raw: &str, pattern: &str) -> bool {
    raw.len() == pattern.len()
        && raw.bytes().zip(pattern.bytes()).all(|(b, p)| match p {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        })
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `SchedulingError::InvalidDate` when the string is not exactly
/// four digits, two digits and two digits separated by `-`, or does not name
/// a real calendar day.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    if !has_shape(raw, "dddd-dd-dd") {
        return Err(SchedulingError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| SchedulingError::InvalidDate(raw.to_string()))
}

/// Day of the week with Sunday = 0 through Saturday = 6.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
