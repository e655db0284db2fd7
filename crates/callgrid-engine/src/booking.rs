//! Clients, call types and bookings.
//!
//! A `Booking` stores only its canonical fields. Duration, recurrence and the
//! weekly pattern all follow from `call_type` and `date`, so they are computed
//! on access instead of being kept in sync by hand. The serialized document
//! still carries them for consumers that expect the full shape.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, SchedulingError};
use crate::grid::{self, SlotTime};

/// The two kinds of call the grid can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallType {
    /// 40-minute first call. Never recurs.
    Onboarding,
    /// 20-minute call that repeats weekly from its anchor date, indefinitely.
    FollowUp,
}

impl CallType {
    /// Length of the call in minutes.
    pub fn duration_minutes(self) -> u16 {
        match self {
            CallType::Onboarding => 40,
            CallType::FollowUp => 20,
        }
    }

    /// Only follow-ups recur.
    pub fn is_recurring(self) -> bool {
        matches!(self, CallType::FollowUp)
    }

    /// Wire name: `onboarding` or `follow-up`.
    pub fn as_str(self) -> &'static str {
        match self {
            CallType::Onboarding => "onboarding",
            CallType::FollowUp => "follow-up",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallType {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "onboarding" => Ok(CallType::Onboarding),
            "follow-up" => Ok(CallType::FollowUp),
            other => Err(SchedulingError::UnknownCallType(other.to_string())),
        }
    }
}

/// A person who can be booked. Owned by the store and immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,
}

/// Repetition interval of a recurring booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
}

/// How a recurring booking repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPattern {
    pub frequency: Frequency,
    /// 0 = Sunday through 6 = Saturday.
    pub day_of_week: u32,
}

/// Everything needed to persist a booking except the identity and timestamps
/// the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub call_type: CallType,
    pub date: NaiveDate,
    pub time: SlotTime,
}

/// A stored booking. When recurring, this single record stands for the whole
/// weekly series starting at `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    /// Client snapshot taken at booking time; not re-synced later.
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub call_type: CallType,
    /// Anchor date: the first (or only) occurrence.
    pub date: NaiveDate,
    pub time: SlotTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Build a stored booking from a draft, stamping both timestamps with `now`.
    pub fn from_draft(id: impl Into<String>, draft: BookingDraft, now: DateTime<Utc>) -> Self {
        Booking {
            id: id.into(),
            client_id: draft.client_id,
            client_name: draft.client_name,
            client_phone: draft.client_phone,
            call_type: draft.call_type,
            date: draft.date,
            time: draft.time,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derived from the call type, never stored.
    pub fn duration_minutes(&self) -> u16 {
        self.call_type.duration_minutes()
    }

    pub fn is_recurring(&self) -> bool {
        self.call_type.is_recurring()
    }

    /// Weekly pattern on the anchor date's weekday; `None` for onboarding calls.
    pub fn recurring_pattern(&self) -> Option<RecurringPattern> {
        self.is_recurring().then(|| RecurringPattern {
            frequency: Frequency::Weekly,
            day_of_week: grid::day_of_week(self.date),
        })
    }

    /// Occupied interval `[start, end)` in minutes since midnight.
    pub fn interval(&self) -> (u16, u16) {
        let start = self.time.minute();
        (start, start + self.duration_minutes())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingDocument<'a> {
    id: &'a str,
    client_id: &'a str,
    client_name: &'a str,
    client_phone: &'a str,
    call_type: CallType,
    date: NaiveDate,
    time: SlotTime,
    duration: u16,
    is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurring_pattern: Option<RecurringPattern>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Serialize for Booking {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        BookingDocument {
            id: &self.id,
            client_id: &self.client_id,
            client_name: &self.client_name,
            client_phone: &self.client_phone,
            call_type: self.call_type,
            date: self.date,
            time: self.time,
            duration: self.duration_minutes(),
            is_recurring: self.is_recurring(),
            recurring_pattern: self.recurring_pattern(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .serialize(serializer)
    }
}
