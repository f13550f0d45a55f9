//! Form workflow: API client and controller for the client record form

pub mod api;
pub mod controller;

pub use api::ClientApi;
pub use controller::{CloseCallback, FormController, SubmitError};
