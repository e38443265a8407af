use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod models;
mod seed;

use crate::config::Config;
use crate::db::Tables;

pub const SERVICE_NAME: &str = "Demo API";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Shared application state. Cloning only bumps the `Arc`; the tables are never written.
#[derive(Clone)]
pub struct AppState {
    pub tables: Arc<Tables>,
}

impl AppState {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Tables::seeded())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,demo_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_args();

    info!("╔══════════════════════════════════════╗");
    info!("║  {} v{}  — chaos-testing target ║", SERVICE_NAME, SERVICE_VERSION);
    info!("║  users · products · orders · health  ║");
    info!("╚══════════════════════════════════════╝");

    let state = AppState::seeded();
    info!(
        users = state.tables.users().len(),
        products = state.tables.products().len(),
        "In-memory tables loaded."
    );

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Routes: GET / · GET /api/users[/:id] · GET /api/products[/:id] · POST /api/orders · GET /api/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped.");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Info / Health ───────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))

        // ── Users ───────────────────────────────────────────────────────────
        .route("/api/users", get(handlers::users::list_users))
        .route("/api/users/:id", get(handlers::users::get_user))

        // ── Products ────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product))

        // ── Orders ──────────────────────────────────────────────────────────
        .route("/api/orders", post(handlers::orders::create_order))

        .fallback(handlers::route_not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(middleware::map_response(handlers::method_not_allowed_detail))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, shutting down...");
        }
    }
}
