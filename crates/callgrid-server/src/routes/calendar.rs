//! Calendar view endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use callgrid_engine::{parse_date, CalendarDay, DayStats};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calendar/{date}", get(calendar_day))
        .route("/calendar/{date}/stats", get(day_stats))
}

/// GET /calendar/:date - The 28-slot grid for one date
async fn calendar_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<CalendarDay>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(state.scheduler.calendar_day(date)?))
}

/// GET /calendar/:date/stats - Booked slot counts for one date
async fn day_stats(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayStats>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(state.scheduler.day_stats(date)?))
}
