//! Server module: client route group and the application shell

pub mod clients;
pub mod shell;

pub use clients::{AppState, build_client_routes};
pub use shell::AppShell;
