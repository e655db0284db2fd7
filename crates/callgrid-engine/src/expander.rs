//! Occurrence expansion for weekly recurring bookings.
//!
//! A recurring booking is one stored record. Its occurrences are never
//! materialized; instead a date is tested against the series: same weekday as
//! the anchor, and not before it. Series have no end.

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::error::Result;
use crate::grid;
use crate::store::BookingStore;

/// Whether `booking`'s weekly series has an occurrence on `date`.
///
/// The anchor date itself counts as the first occurrence. Non-recurring
/// bookings never expand.
pub fn occurs_on(booking: &Booking, date: NaiveDate) -> bool {
    match booking.recurring_pattern() {
        Some(pattern) => pattern.day_of_week == grid::day_of_week(date) && booking.date <= date,
        None => false,
    }
}

/// Every stored recurring booking with an occurrence on `date`.
pub fn occurrences_on_date<S: BookingStore + ?Sized>(store: &S, date: NaiveDate) -> Result<Vec<Booking>> {
    let candidates = store.recurring_bookings(grid::day_of_week(date))?;
    Ok(candidates
        .into_iter()
        .filter(|b| occurs_on(b, date))
        .collect())
}
