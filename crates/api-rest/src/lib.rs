//! # API REST
//!
//! REST API implementation for VitaWeave.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for transport types and `vitaweave-core` for the triage engine.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    HealthRes, HealthService, ListPatientsRes, PatientDto, PatientIdDto, ReferralsRes, RiskRes,
    ServiceRecommendationDto, SummaryRes, TriagePatientReq,
};
use roster::Roster;
use vitaweave_core::{
    auto_triage, classify_risk, config, filter_by_risk, find_by_id, recommend_services, search,
    summarize_on, CoreConfig, Patient, RiskLevel, RosterService,
};

type ApiError = (StatusCode, String);

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    roster_service: RosterService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            roster_service: RosterService::new(cfg),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        triage_patients,
        triage_roster,
        patient_risk,
        patient_referrals,
        patient_summary,
    ),
    components(schemas(
        HealthRes,
        PatientDto,
        PatientIdDto,
        TriagePatientReq,
        ListPatientsRes,
        RiskRes,
        ServiceRecommendationDto,
        ReferralsRes,
        SummaryRes,
    ))
)]
pub struct ApiDoc;

/// Resolve core configuration from the process environment.
///
/// # Environment Variables
/// - `VITAWEAVE_ROSTER`: roster file (default: `roster/patients.yaml` found from the working
///   directory or workspace)
/// - `VITAWEAVE_TODAY`: optional `YYYY-MM-DD` date that summaries treat as today
///
/// # Errors
/// Returns an error if the roster cannot be located or the date override is malformed.
pub fn core_config_from_env() -> anyhow::Result<CoreConfig> {
    let roster_override = std::env::var("VITAWEAVE_ROSTER").ok().map(PathBuf::from);
    let roster_path = config::resolve_roster_path(roster_override)?;
    let reference_date =
        config::reference_date_from_env_value(std::env::var("VITAWEAVE_TODAY").ok())?;

    Ok(CoreConfig::new(roster_path, reference_date)?)
}

/// Builds the REST router with OpenAPI docs and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients/:id/risk", get(patient_risk))
        .route("/patients/:id/referrals", get(patient_referrals))
        .route("/patients/:id/summary", get(patient_summary))
        .route("/triage", post(triage_patients))
        .route("/triage/roster", post(triage_roster))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Query parameters for the patient list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPatientsQuery {
    /// `High`, `Medium`, `Low`, or `All` (default).
    pub risk: Option<String>,
    /// Case-insensitive search over name, condition and status.
    pub q: Option<String>,
}

fn load_roster(state: &AppState) -> Result<Vec<Patient>, ApiError> {
    state.roster_service.load().map_err(|e| {
        tracing::error!("Roster load error: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
    })
}

fn find_patient(patients: &[Patient], id: &str) -> Result<Patient, ApiError> {
    find_by_id(patients, id)
        .cloned()
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("patient not found: {id}")))
}

fn parse_risk_filter(value: Option<&str>) -> Result<Option<RiskLevel>, ApiError> {
    match value.map(str::trim) {
        None | Some("") | Some("All") => Ok(None),
        Some(level) => level
            .parse::<RiskLevel>()
            .map(Some)
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/patients",
    params(ListPatientsQuery),
    responses(
        (status = 200, description = "Roster patients in stored order", body = ListPatientsRes),
        (status = 400, description = "Unknown risk filter"),
        (status = 500, description = "Internal server error")
    )
)]
/// List roster patients, optionally filtered by risk and search text
///
/// # Errors
/// Returns `400 Bad Request` for an unknown risk filter and `500 Internal Server Error` if the
/// roster cannot be loaded.
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<ListPatientsQuery>,
) -> Result<Json<ListPatientsRes>, ApiError> {
    let risk = parse_risk_filter(query.risk.as_deref())?;
    let patients = load_roster(&state)?;
    let filtered = filter_by_risk(&patients, risk);
    let found = search(&filtered, query.q.as_deref().unwrap_or_default());
    Ok(Json(ListPatientsRes::from_patients(&found)))
}

#[utoipa::path(
    post,
    path = "/triage",
    request_body = Vec<TriagePatientReq>,
    responses(
        (status = 200, description = "Patients with refreshed risk, most urgent first", body = ListPatientsRes),
        (status = 400, description = "Body is not a valid roster")
    )
)]
/// Triage a caller-supplied patient list
///
/// The body is validated with the same strict rules as roster files, so a malformed row is
/// reported with its field path.
#[axum::debug_handler]
async fn triage_patients(
    State(_state): State<AppState>,
    body: String,
) -> Result<Json<ListPatientsRes>, ApiError> {
    let patients =
        Roster::parse_json(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(Json(ListPatientsRes::from_patients(&auto_triage(&patients))))
}

#[utoipa::path(
    post,
    path = "/triage/roster",
    responses(
        (status = 200, description = "Configured roster with refreshed risk, most urgent first", body = ListPatientsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Triage the configured roster
#[axum::debug_handler]
async fn triage_roster(State(state): State<AppState>) -> Result<Json<ListPatientsRes>, ApiError> {
    let patients = load_roster(&state)?;
    Ok(Json(ListPatientsRes::from_patients(&auto_triage(&patients))))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/risk",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Freshly classified risk", body = RiskRes),
        (status = 404, description = "Unknown patient")
    )
)]
/// Classify one roster patient's risk
#[axum::debug_handler]
async fn patient_risk(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<RiskRes>, ApiError> {
    let patients = load_roster(&state)?;
    let patient = find_patient(&patients, &id)?;
    Ok(Json(RiskRes {
        id,
        risk_level: classify_risk(&patient).to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/referrals",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Suggested services in rule order", body = ReferralsRes),
        (status = 404, description = "Unknown patient")
    )
)]
/// Suggest follow-up services for one roster patient
#[axum::debug_handler]
async fn patient_referrals(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ReferralsRes>, ApiError> {
    let patients = load_roster(&state)?;
    let patient = find_patient(&patients, &id)?;
    let recommendations = recommend_services(&patient)
        .iter()
        .map(ServiceRecommendationDto::from)
        .collect();
    Ok(Json(ReferralsRes {
        id,
        recommendations,
    }))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/summary",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Narrative case summary", body = SummaryRes),
        (status = 404, description = "Unknown patient")
    )
)]
/// Narrative case summary for one roster patient
#[axum::debug_handler]
async fn patient_summary(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<SummaryRes>, ApiError> {
    let patients = load_roster(&state)?;
    let patient = find_patient(&patients, &id)?;
    let today = state.roster_service.config().today();
    Ok(Json(SummaryRes {
        id,
        summary: summarize_on(&patient, today),
        as_of: today.format("%Y-%m-%d").to_string(),
    }))
}
