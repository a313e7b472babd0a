//! JSON transport types for the REST API.
//!
//! Field names follow the patient store's camelCase so clients can post roster rows unchanged.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vitaweave_core::{Patient, ServiceRecommendation};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A patient roster row as sent and returned over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub condition: String,
    pub last_visit: String,
    /// One of `Active`, `Critical`, `Stable`.
    pub status: String,
    /// One of `High`, `Medium`, `Low`.
    pub risk_level: String,
    pub follow_up_urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Patient> for PatientDto {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.to_string(),
            age: patient.age.years(),
            condition: patient.condition.clone(),
            last_visit: patient.last_visit.clone(),
            status: patient.status.to_string(),
            risk_level: patient.risk_level.to_string(),
            follow_up_urgent: patient.follow_up_urgent,
            follow_up_due: patient.follow_up_due.clone(),
            phone: patient.phone.clone(),
            image: patient.image.clone(),
        }
    }
}

/// Patient id as posted: store ids are integers, other sources use text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PatientIdDto {
    Number(u64),
    Text(String),
}

/// A roster row accepted by `POST /triage`.
///
/// Looser than [`PatientDto`]: `riskLevel` and `followUpUrgent` may be omitted and default to
/// `Low` and `false`. Unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TriagePatientReq {
    pub id: PatientIdDto,
    pub name: String,
    /// Whole years, `0..=130`.
    pub age: u32,
    pub condition: String,
    pub last_visit: String,
    /// One of `Active`, `Critical`, `Stable`.
    pub status: String,
    /// One of `High`, `Medium`, `Low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_urgent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListPatientsRes {
    pub patients: Vec<PatientDto>,
}

impl ListPatientsRes {
    pub fn from_patients(patients: &[Patient]) -> Self {
        Self {
            patients: patients.iter().map(PatientDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskRes {
    pub id: String,
    pub risk_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceRecommendationDto {
    pub id: String,
    pub title: String,
    pub reason: String,
    pub icon: String,
}

impl From<&ServiceRecommendation> for ServiceRecommendationDto {
    fn from(rec: &ServiceRecommendation) -> Self {
        Self {
            id: rec.id.to_string(),
            title: rec.title.to_string(),
            reason: rec.reason.to_string(),
            icon: rec.icon.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferralsRes {
    pub id: String,
    pub recommendations: Vec<ServiceRecommendationDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRes {
    pub id: String,
    pub summary: String,
    /// Reference date the summary was computed against (YYYY-MM-DD).
    pub as_of: String,
}
