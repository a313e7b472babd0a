use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, core_config_from_env, router};
use vitaweave_core::{RiskLevel, RosterService, auto_triage, filter_by_risk};

/// Main entry point for the VitaWeave application
///
/// Resolves configuration, checks the roster loads, logs a triage snapshot and serves the REST
/// API (with Swagger UI at `/swagger-ui`).
///
/// # Environment Variables
/// - `VITAWEAVE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `VITAWEAVE_ROSTER`: roster file (default: `roster/patients.yaml`)
/// - `VITAWEAVE_TODAY`: optional `YYYY-MM-DD` date used as today for summaries
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, roster loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitaweave_run=info".parse()?)
                .add_directive("vitaweave_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("VITAWEAVE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let cfg = Arc::new(core_config_from_env()?);

    // Fail fast on a broken roster rather than on the first request.
    let patients = RosterService::new(cfg.clone()).load()?;
    let triaged = auto_triage(&patients);
    tracing::info!(
        high = filter_by_risk(&triaged, Some(RiskLevel::High)).len(),
        medium = filter_by_risk(&triaged, Some(RiskLevel::Medium)).len(),
        low = filter_by_risk(&triaged, Some(RiskLevel::Low)).len(),
        "roster triage snapshot"
    );

    tracing::info!("++ Starting VitaWeave REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(AppState::new(cfg))).await?;

    Ok(())
}
