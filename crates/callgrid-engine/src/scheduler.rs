//! The booking workflow on top of a [`BookingStore`].
//!
//! Booking is a single check-then-write: occupancy is loaded, the proposal is
//! validated, then the draft is persisted. Nothing holds the store between the
//! read and the write, so two concurrent requests for the same slot can both
//! pass validation. Stores that need a hard guarantee must enforce uniqueness
//! on `(date, time)` at insert.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::aggregator;
use crate::booking::{Booking, BookingDraft, Client};
use crate::calendar::{self, CalendarDay, DayStats};
use crate::client;
use crate::conflict::{self, Proposal};
use crate::error::Result;
use crate::store::BookingStore;

/// Availability queries and booking operations over one store.
pub struct Scheduler<S> {
    store: S,
}

impl<S: BookingStore> Scheduler<S> {
    /// Wrap `store`. Nothing is loaded until a query runs.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct and recurring bookings on `date`, deduplicated by id.
    pub fn occupied_on(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        aggregator::occupied_on(&self.store, date)
    }

    /// The rendered 28-slot grid for `date`.
    pub fn calendar_day(&self, date: NaiveDate) -> Result<CalendarDay> {
        let occupied = self.occupied_on(date)?;
        debug!(%date, bookings = occupied.len(), "rendering calendar day");
        Ok(calendar::render(date, &occupied))
    }

    pub fn day_stats(&self, date: NaiveDate) -> Result<DayStats> {
        Ok(calendar::calendar_stats(&self.calendar_day(date)?))
    }

    /// Validate `proposal` against the current occupancy of its date.
    ///
    /// # Errors
    /// `SchedulingError::Conflict` with the reason when the call does not fit.
    pub fn check(&self, proposal: &Proposal) -> Result<()> {
        let occupied = self.occupied_on(proposal.date)?;
        debug!(
            date = %proposal.date,
            time = %proposal.time,
            call_type = %proposal.call_type,
            occupied = occupied.len(),
            "validating proposal"
        );
        conflict::validate(proposal, &occupied)?;
        Ok(())
    }

    /// Validate and persist a new booking.
    pub fn book(&self, draft: BookingDraft) -> Result<Booking> {
        let proposal = Proposal {
            date: draft.date,
            time: draft.time,
            call_type: draft.call_type,
        };
        if let Err(e) = self.check(&proposal) {
            warn!(date = %proposal.date, time = %proposal.time, reason = %e, "booking rejected");
            return Err(e);
        }

        let booking = self.store.create_booking(draft)?;
        info!(
            id = %booking.id,
            date = %booking.date,
            time = %booking.time,
            call_type = %booking.call_type,
            recurring = booking.is_recurring(),
            "booking created"
        );
        Ok(booking)
    }

    /// Delete a booking by id. A recurring series disappears from every date.
    pub fn cancel(&self, id: &str) -> Result<()> {
        self.store.delete_booking(id)?;
        info!(%id, "booking deleted");
        Ok(())
    }

    pub fn clients(&self, search: Option<&str>) -> Result<Vec<Client>> {
        let clients = self.store.clients()?;
        Ok(match search {
            Some(term) => client::search_clients(clients, term),
            None => clients,
        })
    }
}
