//! Core module containing the client data model, errors, and service traits

pub mod client;
pub mod error;
pub mod service;
pub mod validation;

pub use client::{BillingMethod, BusinessUnit, ClientId, ClientRecord};
pub use error::{
    ClienteleError, ErrorResponse, FieldValidationError, RecordError, RequestError, StorageError,
    ValidationError,
};
pub use service::ClientService;
pub use validation::validate_record;
