//! In-memory implementation of ClientService
//!
//! The store is the single source of truth for client records. Identifier
//! assignment happens under the same write lock as the insert, so two
//! concurrent creates can never observe the same sequence value — this is
//! what makes the form's count-derived preview id safe to treat as advisory.

use crate::core::client::{ClientId, ClientRecord};
use crate::core::error::{ClienteleError, RecordError, StorageError};
use crate::core::service::ClientService;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

struct StoreState {
    records: HashMap<ClientId, ClientRecord>,
    next_seq: u32,
}

/// In-memory client service implementation
///
/// Uses RwLock for thread-safe access. Suitable for testing, development,
/// and single-process deployments.
#[derive(Clone)]
pub struct InMemoryClientService {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryClientService {
    /// Create a new empty in-memory client service
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                records: HashMap::new(),
                next_seq: 1,
            })),
        }
    }
}

impl Default for InMemoryClientService {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned<T>(err: std::sync::PoisonError<T>) -> ClienteleError {
    ClienteleError::Storage(StorageError::LockPoisoned {
        message: err.to_string(),
    })
}

#[async_trait]
impl ClientService for InMemoryClientService {
    async fn create(&self, mut record: ClientRecord) -> Result<ClientRecord, ClienteleError> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        // The submitted id is advisory only; assign the real one here.
        let id = ClientId::from_seq(state.next_seq);
        state.next_seq += 1;

        record.client_id = id.clone();
        state.records.insert(id, record.clone());

        Ok(record)
    }

    async fn get(&self, id: &ClientId) -> Result<Option<ClientRecord>, ClienteleError> {
        let state = self.state.read().map_err(lock_poisoned)?;

        Ok(state.records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ClientRecord>, ClienteleError> {
        let state = self.state.read().map_err(lock_poisoned)?;

        Ok(state.records.values().cloned().collect())
    }

    async fn update(
        &self,
        id: &ClientId,
        mut record: ClientRecord,
    ) -> Result<ClientRecord, ClienteleError> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        if !state.records.contains_key(id) {
            return Err(ClienteleError::Record(RecordError::NotFound {
                id: id.clone(),
            }));
        }

        // The path id wins over whatever the payload carries.
        record.client_id = id.clone();
        state.records.insert(id.clone(), record.clone());

        Ok(record)
    }
}
