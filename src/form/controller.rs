//! Form controller for creating and editing client records
//!
//! Holds a single record's editable fields, derives `currency` from the
//! attached catalog, and submits the snapshot as a create or update. One
//! controller instance corresponds to one open form; no two instances share
//! mutable state, and the store remains the single source of truth — the
//! controller's copy is transient and disposable.

use crate::core::client::{BillingMethod, BusinessUnit, ClientId, ClientRecord};
use crate::core::error::{RequestError, ValidationError};
use crate::core::validation::validate_record;
use crate::currency::{CurrencyCatalog, LocationEntry};
use crate::form::api::ClientApi;
use std::fmt;

/// Outcome of a failed submission attempt
///
/// All variants are terminal for the attempt: no retry, no partial save.
#[derive(Debug)]
pub enum SubmitError {
    /// Required-field presence failed before any request was issued
    Invalid(ValidationError),

    /// The server answered non-ok; carries the response body verbatim
    Rejected(String),

    /// No usable response was received; reported generically
    Failed,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(e) => write!(f, "{}", e),
            SubmitError::Rejected(body) => write!(f, "failed to save client: {}", body),
            SubmitError::Failed => write!(f, "an error occurred while saving the client"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Callback invoked exactly once when a submission succeeds
pub type CloseCallback = Box<dyn FnMut() + Send>;

/// Controller state for one client form
pub struct FormController {
    fields: ClientRecord,

    /// Set when editing an existing record; update requests are addressed
    /// by this id even if other fields changed
    original_id: Option<ClientId>,

    /// Snapshot of existing records, used only for preview-id derivation
    clients: Vec<ClientRecord>,

    catalog: CurrencyCatalog,
    api: ClientApi,
    on_close: CloseCallback,
}

impl FormController {
    /// Controller for a blank form (create flow)
    ///
    /// The preview identifier is generated once the existing records have
    /// been fetched via [`mount`](Self::mount) or
    /// [`load_clients`](Self::load_clients).
    pub fn new_client(api: ClientApi, on_close: CloseCallback) -> Self {
        Self {
            fields: ClientRecord::empty(),
            original_id: None,
            clients: Vec::new(),
            catalog: CurrencyCatalog::empty(),
            api,
            on_close,
        }
    }

    /// Controller pre-populated from an existing record (edit flow)
    ///
    /// Every field is copied from the record; no identifier is generated.
    pub fn for_record(api: ClientApi, record: ClientRecord, on_close: CloseCallback) -> Self {
        Self {
            original_id: Some(record.client_id.clone()),
            fields: record,
            clients: Vec::new(),
            catalog: CurrencyCatalog::empty(),
            api,
            on_close,
        }
    }

    /// Run the mount-time fetches concurrently: existing records and the
    /// currency catalog
    ///
    /// Both degrade silently on failure; the form is usable either way.
    pub async fn mount(&mut self, catalog_url: &str) {
        let (clients, catalog) = futures::join!(
            self.api.fetch_all(),
            CurrencyCatalog::fetch(self.api.http(), catalog_url),
        );
        self.apply_clients(clients);
        self.attach_catalog(catalog);
    }

    /// Fetch the existing records and, in the create flow, derive the
    /// preview identifier from their count
    ///
    /// The preview is a pure function of this snapshot and is not re-derived
    /// afterwards; the store-assigned id remains authoritative on create.
    pub async fn load_clients(&mut self) {
        let result = self.api.fetch_all().await;
        self.apply_clients(result);
    }

    fn apply_clients(&mut self, result: Result<Vec<ClientRecord>, RequestError>) {
        match result {
            Ok(clients) => {
                if self.original_id.is_none() && self.fields.client_id.as_str().is_empty() {
                    self.fields.client_id = ClientId::preview(clients.len());
                }
                self.clients = clients;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch client data");
            }
        }
    }

    /// Fetch the currency catalog; degrades silently on failure
    pub async fn load_catalog(&mut self, catalog_url: &str) {
        let catalog = CurrencyCatalog::fetch(self.api.http(), catalog_url).await;
        self.attach_catalog(catalog);
    }

    /// Attach an already-built catalog and re-derive `currency` for the
    /// current location
    pub fn attach_catalog(&mut self, catalog: CurrencyCatalog) {
        self.catalog = catalog;
        self.derive_currency();
    }

    // --- field accessors -------------------------------------------------

    /// Current field snapshot as a record
    pub fn record(&self) -> ClientRecord {
        self.fields.clone()
    }

    pub fn client_id(&self) -> &str {
        self.fields.client_id.as_str()
    }

    /// Derived currency; read-only, set through [`set_location`](Self::set_location)
    pub fn currency(&self) -> &str {
        &self.fields.currency
    }

    pub fn location(&self) -> &str {
        &self.fields.location
    }

    /// Whether this controller edits an existing record
    pub fn is_editing(&self) -> bool {
        self.original_id.is_some()
    }

    /// The record snapshot taken at mount time
    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    /// Options for the location selector, in catalog order
    pub fn locations(&self) -> Vec<LocationEntry> {
        self.catalog.locations()
    }

    // --- field setters ---------------------------------------------------

    pub fn set_client_name(&mut self, value: impl Into<String>) {
        self.fields.client_name = value.into();
    }

    pub fn set_bu(&mut self, bu: BusinessUnit) {
        self.fields.bu = bu.as_str().to_string();
    }

    pub fn set_billing_method(&mut self, method: BillingMethod) {
        self.fields.billing_method = method.as_str().to_string();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email_id = value.into();
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.fields.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.fields.last_name = value.into();
    }

    /// Set the location and re-derive `currency` from the catalog
    pub fn set_location(&mut self, value: impl Into<String>) {
        self.fields.location = value.into();
        self.derive_currency();
    }

    /// Overwrite `currency` with the mapped value for the current location
    ///
    /// A catalog miss, or a country mapped to the empty string, leaves the
    /// previous currency in place — it is never cleared.
    fn derive_currency(&mut self) {
        if self.fields.location.is_empty() {
            return;
        }
        if let Some(code) = self.catalog.currency_for(&self.fields.location) {
            if !code.is_empty() {
                self.fields.currency = code.to_string();
            }
        }
    }

    // --- submission ------------------------------------------------------

    /// Submit the current field snapshot
    ///
    /// Issues an update addressed by the original id when editing, a create
    /// otherwise. On success the close callback fires exactly once and, in
    /// the create flow, the server-assigned identifier replaces the local
    /// preview. Any failure is terminal for the attempt.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let record = self.record();
        validate_record(&record).map_err(SubmitError::Invalid)?;

        let result = match &self.original_id {
            Some(id) => self.api.update(id, &record).await,
            None => self.api.create(&record).await,
        };

        match result {
            Ok(stored) => {
                self.fields.client_id = stored.client_id;
                (self.on_close)();
                Ok(())
            }
            Err(RequestError::Rejected { body, .. }) => Err(SubmitError::Rejected(body)),
            Err(err @ RequestError::Transport { .. }) => {
                tracing::error!(error = %err, "client submission failed");
                Err(SubmitError::Failed)
            }
        }
    }
}
