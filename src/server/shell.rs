//! HTTP application shell
//!
//! Composes resource-scoped route groups under their own prefixes, serves a
//! static asset directory, and converts anything unmatched into the generic
//! error body. Each group owns its prefix, so adding entities later cannot
//! collide with existing paths.

use anyhow::Result;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::core::error::ErrorResponse;

/// Builder for the application shell
///
/// # Example
///
/// ```ignore
/// let app = AppShell::new()
///     .with_group("/clients", build_client_routes(state))
///     .with_static_dir("public")
///     .build();
/// ```
pub struct AppShell {
    groups: Vec<(String, Router)>,
    static_dir: Option<PathBuf>,
}

impl AppShell {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            static_dir: None,
        }
    }

    /// Mount a route group under its own prefix
    pub fn with_group(mut self, prefix: impl Into<String>, routes: Router) -> Self {
        self.groups.push((prefix.into(), routes));
        self
    }

    /// Serve files from `dir` for paths no route group claims
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the composed router
    ///
    /// Adds health routes, request tracing, and permissive CORS. Unmatched
    /// paths fall through to the static directory (when configured) and
    /// finally to the generic 404 body.
    pub fn build(self) -> Router {
        let mut app = Self::health_routes();

        for (prefix, routes) in self.groups {
            app = app.nest(&prefix, routes);
        }

        app = match self.static_dir {
            Some(dir) => {
                let assets = ServeDir::new(dir).not_found_service(handle_not_found.into_service());
                app.fallback_service(assets)
            }
            None => app.fallback(handle_not_found),
        };

        app.layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds the provided address, starts serving requests, and handles
    /// SIGTERM and SIGINT (Ctrl+C) for graceful shutdown.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/healthz", get(health_check))
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "clientele"
    }))
}

/// Catch-all for unmatched routes
async fn handle_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: "resource not found".to_string(),
            details: None,
        }),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
