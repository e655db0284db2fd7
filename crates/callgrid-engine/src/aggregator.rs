//! Merge direct bookings and recurring occurrences into a day's occupancy.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::error::Result;
use crate::expander;
use crate::store::BookingStore;

/// Union two booking lists keyed by id, keeping the first appearance.
///
/// A recurring booking shows up in both lists on its own anchor date; it must
/// only be counted once.
pub fn merge_occupancy(direct: Vec<Booking>, recurring: Vec<Booking>) -> Vec<Booking> {
    let mut seen = HashSet::new();
    direct
        .into_iter()
        .chain(recurring)
        .filter(|b| seen.insert(b.id.clone()))
        .collect()
}

/// All bookings occupying `date`: direct bookings anchored there plus every
/// recurring series with an occurrence on it. Always reloaded from the store.
pub fn occupied_on<S: BookingStore + ?Sized>(store: &S, date: NaiveDate) -> Result<Vec<Booking>> {
    let direct = store.bookings_by_date(date)?;
    let recurring = expander::occurrences_on_date(store, date)?;
    Ok(merge_occupancy(direct, recurring))
}
