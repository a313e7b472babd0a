//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, for development and debugging. The workspace's main
//! `vitaweave-run` binary serves the same router.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{core_config_from_env, router, AppState};

/// Main entry point for the VitaWeave REST API server
///
/// # Environment Variables
/// - `VITAWEAVE_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `VITAWEAVE_ROSTER`, `VITAWEAVE_TODAY`: see [`core_config_from_env`]
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration cannot be resolved,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("VITAWEAVE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let cfg = Arc::new(core_config_from_env()?);

    tracing::info!(
        roster = %cfg.roster_path().display(),
        reference_date = ?cfg.reference_date(),
        "-- Starting VitaWeave REST API on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(AppState::new(cfg))).await?;

    Ok(())
}
