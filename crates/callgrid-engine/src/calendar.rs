//! Project a day's occupancy onto the 28-slot grid.
//!
//! A booking marks only the slot matching its own start time. A 40-minute
//! onboarding call at 10:30 leaves 10:50 rendered as available even though
//! [`crate::conflict::validate`] will refuse anything placed there.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::Booking;
use crate::grid::{self, SlotTime};

/// One grid slot and the booking starting in it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlot {
    pub time: SlotTime,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

/// One date and its full grid, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub time_slots: Vec<TimeSlot>,
}

/// Booked-slot counts for a rendered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    /// Slots holding a booking.
    pub total: usize,
    /// Of those, slots held by a weekly follow-up series.
    pub recurring: usize,
    pub one_time: usize,
}

/// Render `occupied` onto the grid for `date`, one [`TimeSlot`] per slot.
pub fn render(date: NaiveDate, occupied: &[Booking]) -> CalendarDay {
    let time_slots = grid::slot_times()
        .map(|time| {
            let booking = occupied.iter().find(|b| b.time == time).cloned();
            TimeSlot {
                time,
                available: booking.is_none(),
                booking,
            }
        })
        .collect();

    CalendarDay { date, time_slots }
}

/// Count booked slots in a rendered day, split by recurrence.
pub fn calendar_stats(day: &CalendarDay) -> DayStats {
    day.time_slots
        .iter()
        .filter_map(|slot| slot.booking.as_ref())
        .fold(DayStats::default(), |mut stats, booking| {
            stats.total += 1;
            if booking.is_recurring() {
                stats.recurring += 1;
            } else {
                stats.one_time += 1;
            }
            stats
        })
}
