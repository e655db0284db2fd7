//! Decide whether a proposed call fits into a day's occupancy.
//!
//! Intervals are half-open `[start, end)` in minutes since midnight, so a call
//! ending exactly when another starts is not a conflict.

use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::{Booking, CallType};
use crate::grid::{SlotTime, CLOSING_MINUTE};

/// A call someone wants to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub date: NaiveDate,
    pub time: SlotTime,
    pub call_type: CallType,
}

impl Proposal {
    /// Interval `[start, end)` the call would occupy, in minutes since midnight.
    pub fn interval(&self) -> (u16, u16) {
        let start = self.time.minute();
        (start, start + self.call_type.duration_minutes())
    }
}

/// Why a proposal was turned down.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Time slot already booked")]
    SlotTaken,

    #[error("Would overlap with existing {call_type} call at {time}")]
    Overlaps { call_type: CallType, time: SlotTime },

    #[error("Booking extends beyond business hours")]
    BeyondBusinessHours,
}

/// Check `proposal` against every booking in `occupied`.
///
/// Conflicts are reported before the business-hours check. When several
/// bookings conflict, the first one in `occupied` is the one reported.
pub fn validate(proposal: &Proposal, occupied: &[Booking]) -> Result<(), Rejection> {
    let (start, end) = proposal.interval();

    for booking in occupied {
        if booking.time == proposal.time {
            return Err(Rejection::SlotTaken);
        }
        let (b_start, b_end) = booking.interval();
        if start < b_end && end > b_start {
            return Err(Rejection::Overlaps {
                call_type: booking.call_type,
                time: booking.time,
            });
        }
    }

    if end > CLOSING_MINUTE {
        return Err(Rejection::BeyondBusinessHours);
    }

    Ok(())
}
