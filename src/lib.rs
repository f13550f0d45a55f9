//! # Clientele
//!
//! A client record management service: a REST persistence layer plus the
//! form workflow that feeds it.
//!
//! ## Features
//!
//! - **Client records**: `CL###` sequential identifiers assigned atomically
//!   by the store; the form's count-derived preview id is advisory only
//! - **Derived currency**: `location` drives `currency` through a catalog
//!   mapping fetched once per form mount; never independently editable
//! - **Degraded mode**: a failed catalog fetch leaves currency derivation
//!   silently disabled instead of raising
//! - **Resource-scoped routing**: each entity's route group owns its prefix
//! - **Typed errors**: every failure renders as a structured error body with
//!   the right status code, defaulting to 500
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clientele::prelude::*;
//! use std::sync::Arc;
//!
//! // Server side: REST surface over an in-memory store
//! let service = Arc::new(InMemoryClientService::new());
//! let state = AppState::new(service);
//! let app = AppShell::new()
//!     .with_group("/clients", build_client_routes(state))
//!     .with_static_dir("public");
//! app.serve("127.0.0.1:3000").await?;
//!
//! // Form side: create a client
//! let api = ClientApi::new(EndpointsConfig::with_base("http://127.0.0.1:3000"));
//! let mut form = FormController::new_client(api, Box::new(|| {}));
//! form.mount("https://restcountries.com/v3.1/all").await;
//! form.set_client_name("Acme");
//! form.set_location("Japan"); // currency becomes "JPY"
//! form.submit().await?;
//! ```

pub mod config;
pub mod core;
pub mod currency;
pub mod form;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BillingMethod, BusinessUnit, ClientId, ClientRecord, ClientService, ClienteleError,
        ErrorResponse, RecordError, RequestError, ValidationError, validate_record,
    };

    // === Currency ===
    pub use crate::currency::{Country, CurrencyCatalog, LocationEntry};

    // === Form ===
    pub use crate::form::{ClientApi, FormController, SubmitError};

    // === Storage ===
    pub use crate::storage::InMemoryClientService;

    // === Config ===
    pub use crate::config::{EndpointsConfig, ServerConfig, ServiceConfig};

    // === Server ===
    pub use crate::server::{AppShell, AppState, build_client_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{get, post, put},
    };
}
