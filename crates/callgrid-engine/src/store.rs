//! The storage collaborator the engine reads bookings from and writes them to.
//!
//! [`BookingStore`] is the only seam between the engine and persistence.
//! [`MemoryStore`] keeps everything in process and backs the server and tests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::booking::{Booking, BookingDraft, Client};
use crate::error::{Result, SchedulingError};

/// Predicate-query access to stored clients and bookings.
pub trait BookingStore: Send + Sync {
    /// Bookings whose anchor `date` equals `date`, recurring or not.
    fn bookings_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>>;

    /// Recurring bookings whose weekly pattern falls on `day_of_week`
    /// (0 = Sunday). No anchor-date filtering happens here.
    fn recurring_bookings(&self, day_of_week: u32) -> Result<Vec<Booking>>;

    /// Persist a draft, assigning its id and timestamps.
    fn create_booking(&self, draft: BookingDraft) -> Result<Booking>;

    /// Remove a booking and, if recurring, its whole series. Unknown ids are a no-op.
    fn delete_booking(&self, id: &str) -> Result<()>;

    fn clients(&self) -> Result<Vec<Client>>;

    fn add_client(&self, name: &str, phone: &str) -> Result<Client>;
}

#[derive(Debug, Default)]
struct Tables {
    clients: Vec<Client>,
    bookings: Vec<Booking>,
}

/// In-process store. Insertion order is preserved for both tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| SchedulingError::Storage("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| SchedulingError::Storage("store lock poisoned".to_string()))
    }
}

impl BookingStore for MemoryStore {
    fn bookings_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        Ok(self
            .read()?
            .bookings
            .iter()
            .filter(|b| b.date == date)
            .cloned()
            .collect())
    }

    fn recurring_bookings(&self, day_of_week: u32) -> Result<Vec<Booking>> {
        Ok(self
            .read()?
            .bookings
            .iter()
            .filter(|b| {
                b.recurring_pattern()
                    .is_some_and(|p| p.day_of_week == day_of_week)
            })
            .cloned()
            .collect())
    }

    fn create_booking(&self, draft: BookingDraft) -> Result<Booking> {
        let booking = Booking::from_draft(Uuid::new_v4().to_string(), draft, Utc::now());
        self.write()?.bookings.push(booking.clone());
        Ok(booking)
    }

    fn delete_booking(&self, id: &str) -> Result<()> {
        self.write()?.bookings.retain(|b| b.id != id);
        Ok(())
    }

    fn clients(&self) -> Result<Vec<Client>> {
        Ok(self.read()?.clients.clone())
    }

    fn add_client(&self, name: &str, phone: &str) -> Result<Client> {
        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        };
        self.write()?.clients.push(client.clone());
        Ok(client)
    }
}
