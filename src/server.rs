//! Health endpoint server
//!
//! Exposes the liveness contract preserved from the original backend:
//! `GET /healthz` returns `{"status": "ok", "version": ..., "uptime": ...}`
//! with uptime in seconds rounded to two decimals. The start instant is
//! captured once at startup and injected through shared state rather than
//! read from a global.

use anyhow::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Shared server state: the instant the process started serving.
#[derive(Debug, Clone)]
pub struct AppState {
    started: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_start(Instant::now())
    }

    /// Build state from an explicit start instant.
    pub fn with_start(started: Instant) -> Self {
        Self { started }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health response body.
#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    version: &'static str,
    uptime: f64,
}

impl Health {
    fn snapshot(state: &AppState) -> Self {
        let uptime = state.started.elapsed().as_secs_f64();
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            uptime: (uptime * 100.0).round() / 100.0,
        }
    }
}

/// Liveness probe handler.
async fn healthz(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health::snapshot(&state))
}

/// Build the router with the health route.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Bind `addr` and serve the health endpoint until interrupted.
pub fn run_serve(addr: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let state = Arc::new(AppState::new());
        let app = router(state);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("health endpoint listening on {}", listener.local_addr()?);
        axum::serve(listener, app).await?;

        Ok::<(), anyhow::Error>(())
    })
}
