//! # callgrid-engine
//!
//! Availability and slot-conflict resolution for a single call calendar.
//!
//! Two call types share one fixed daily grid of 28 twenty-minute slots
//! (10:30 to 19:30): a 40-minute onboarding call and a 20-minute follow-up
//! that repeats weekly from its anchor date forever. The engine answers two
//! questions for a date: what does the grid look like, and does a proposed
//! call fit.
//!
//! ## Modules
//!
//! - [`grid`] — the canonical slot grid, strict date and time parsing
//! - [`booking`] — `Booking`, `CallType`, `Client` and derived recurrence
//! - [`expander`] — which recurring series land on a date
//! - [`aggregator`] — direct + recurring bookings merged into a day's occupancy
//! - [`conflict`] — interval-overlap and business-hours validation
//! - [`calendar`] — occupancy rendered onto the grid, per-day stats
//! - [`store`] — the `BookingStore` seam and an in-memory implementation
//! - [`client`] — client directory search
//! - [`scheduler`] — the booking workflow tying it together
//! - [`error`] — Error types

pub mod aggregator;
pub mod booking;
pub mod calendar;
pub mod client;
pub mod conflict;
pub mod error;
pub mod expander;
pub mod grid;
pub mod scheduler;
pub mod store;

pub use booking::{Booking, BookingDraft, CallType, Client};
pub use calendar::{render, CalendarDay, DayStats, TimeSlot};
pub use conflict::{validate, Proposal, Rejection};
pub use error::{ErrorKind, SchedulingError};
pub use grid::{parse_date, slot_times, SlotTime};
pub use scheduler::Scheduler;
pub use store::{BookingStore, MemoryStore};
