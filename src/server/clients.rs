//! HTTP handlers for client record operations
//!
//! One resource-scoped route group; the shell nests it under `/clients`.
//! Handlers are thin pass-throughs: validate the payload, call the service,
//! render the result. Identifier assignment lives in the store, not here.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use std::sync::Arc;

use crate::core::client::{ClientId, ClientRecord};
use crate::core::error::ClienteleError;
use crate::core::service::ClientService;
use crate::core::validation::validate_record;

/// Application state shared across client handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientService>,
}

impl AppState {
    pub fn new(clients: Arc<dyn ClientService>) -> Self {
        Self { clients }
    }
}

/// Build the client route group
///
/// Routes (relative to the mount prefix):
/// - `GET /` — list all client records
/// - `POST /` — create a record (201, server-assigned id)
/// - `PUT /{client_id}` — overwrite a record (404 when unknown)
pub fn build_client_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route("/{client_id}", put(update_client))
        .with_state(state)
}

/// GET / — all stored records, in no guaranteed order
async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientRecord>>, ClienteleError> {
    let records = state.clients.list().await?;
    Ok(Json(records))
}

/// POST / — validate, store, and return the record with its assigned id
async fn create_client(
    State(state): State<AppState>,
    Json(record): Json<ClientRecord>,
) -> Result<(StatusCode, Json<ClientRecord>), ClienteleError> {
    validate_record(&record)?;

    let stored = state.clients.create(record).await?;
    tracing::info!(client_id = %stored.client_id, "client created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /{client_id} — overwrite an existing record
///
/// Update is create-or-fail: an unknown id is a 404, never an upsert.
async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(record): Json<ClientRecord>,
) -> Result<Json<ClientRecord>, ClienteleError> {
    validate_record(&record)?;

    let id = ClientId::from(client_id);
    let stored = state.clients.update(&id, record).await?;
    tracing::info!(client_id = %stored.client_id, "client updated");

    Ok(Json(stored))
}
