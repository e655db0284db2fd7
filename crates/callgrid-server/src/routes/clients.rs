//! Client directory endpoint

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use callgrid_engine::Client;
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/clients", get(list_clients))
}

#[derive(Debug, Deserialize)]
pub struct ClientQuery {
    pub search: Option<String>,
}

/// GET /clients?search=term - List clients, optionally filtered by name or phone
async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientQuery>,
) -> Result<Json<Vec<Client>>, AppError> {
    Ok(Json(state.scheduler.clients(query.search.as_deref())?))
}
