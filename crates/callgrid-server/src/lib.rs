//! # callgrid-server
//!
//! HTTP delivery for `callgrid-engine`. Every request reloads occupancy from
//! the store; there is no response caching.
//!
//! ## Routes
//!
//! - `GET /api/calendar/{date}` — the day's 28-slot grid
//! - `GET /api/calendar/{date}/stats` — booked slot counts
//! - `POST /api/bookings` — validate and create a booking (201, 400, 409)
//! - `DELETE /api/bookings/{id}` — delete a booking or series (204)
//! - `GET /api/clients?search=` — the client directory
//! - `GET /health` — liveness

pub mod config;
pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use crate::config::Config;
pub use crate::state::AppState;

/// Build the application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
