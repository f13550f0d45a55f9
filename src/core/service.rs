//! Service trait for client record persistence

use crate::core::client::{ClientId, ClientRecord};
use crate::core::error::ClienteleError;
use async_trait::async_trait;

/// Service trait for managing client records
///
/// Implementations provide CRUD operations against a concrete store. The
/// router is agnostic to the underlying storage mechanism and talks only to
/// this trait.
///
/// Identifier assignment is a store concern: `create` receives a record whose
/// `client_id` is advisory at best and returns the stored record carrying the
/// identifier the store actually assigned.
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Store a new record, assigning the next sequential identifier
    async fn create(&self, record: ClientRecord) -> Result<ClientRecord, ClienteleError>;

    /// Get a record by identifier
    async fn get(&self, id: &ClientId) -> Result<Option<ClientRecord>, ClienteleError>;

    /// List all stored records
    async fn list(&self) -> Result<Vec<ClientRecord>, ClienteleError>;

    /// Overwrite the record stored under `id`
    ///
    /// Update is create-or-fail: a missing identifier is a
    /// [`RecordError::NotFound`](crate::core::error::RecordError::NotFound),
    /// never an upsert.
    async fn update(&self, id: &ClientId, record: ClientRecord)
    -> Result<ClientRecord, ClienteleError>;
}
