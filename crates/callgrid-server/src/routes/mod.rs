pub mod bookings;
pub mod calendar;
pub mod clients;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use callgrid_engine::{ErrorKind, SchedulingError};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let api = Router::new()
        .merge(calendar::router())
        .merge(bookings::router())
        .merge(clients::router());

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can return, mapped onto HTTP statuses.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be read as JSON.
    BadRequest(String),
    Scheduling(SchedulingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Scheduling(e) => match e.kind() {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, e.to_string()),
                ErrorKind::Conflict => (StatusCode::CONFLICT, e.to_string()),
                ErrorKind::Internal => {
                    error!(error = %e, "request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        AppError::Scheduling(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

/// GET /health - Liveness probe
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}
