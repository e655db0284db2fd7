//! Booking creation and deletion endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use callgrid_engine::error::{Result, SchedulingError};
use callgrid_engine::{parse_date, Booking, BookingDraft, CallType, SlotTime};
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/{id}", delete(delete_booking))
}

/// Request body for creating a booking. Every field is required; they are
/// optional here so a missing one yields our own 400 rather than a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub call_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(SchedulingError::MissingField(field))
}

impl CreateBookingRequest {
    /// Check presence first, then the call type, date and time formats.
    pub fn into_draft(self) -> Result<BookingDraft> {
        let client_id = required(self.client_id, "clientId")?;
        let client_name = required(self.client_name, "clientName")?;
        let client_phone = required(self.client_phone, "clientPhone")?;
        let call_type = required(self.call_type, "callType")?;
        let date = required(self.date, "date")?;
        let time = required(self.time, "time")?;

        Ok(BookingDraft {
            client_id,
            client_name,
            client_phone,
            call_type: call_type.parse::<CallType>()?,
            date: parse_date(&date)?,
            time: SlotTime::parse(&time)?,
        })
    }
}

/// POST /bookings - Validate and create a booking
async fn create_booking(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateBookingRequest>, JsonRejection>,
) -> std::result::Result<(StatusCode, Json<Booking>), AppError> {
    let Json(request) = payload?;
    let draft = request.into_draft()?;
    let booking = state.scheduler.book(draft)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// DELETE /bookings/:id - Delete a booking (the whole series if recurring)
async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<StatusCode, AppError> {
    state.scheduler.cancel(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
