//! Patient roster wire models and translation helpers.
//!
//! Responsibilities:
//! - Define the public domain-level `Patient` type used by the triage engine
//! - Define a strict wire model for roster rows
//! - Provide translation helpers between domain primitives and the wire model
//!
//! Notes:
//! - `riskLevel` is engine output; rows without one default to `Low` until triage runs
//! - Display-only fields (`phone`, `image`, `followUpDue`) are carried through untouched

use crate::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use vitaweave_types::{Age, NonEmptyText};

// ============================================================================
// Public domain-level types
// ============================================================================

/// Care status recorded against a patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatientStatus {
    Active,
    Critical,
    Stable,
}

impl PatientStatus {
    /// Wire and display label.
    pub fn as_str(self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Critical => "Critical",
            PatientStatus::Stable => "Stable",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(PatientStatus::Active),
            "Critical" => Some(PatientStatus::Critical),
            "Stable" => Some(PatientStatus::Stable),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal clinical urgency, `Low < Medium < High`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Numeric urgency used for worklist ordering.
    pub fn score(self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    /// Wire and display label.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::from_wire(s.trim())
            .ok_or_else(|| RosterError::InvalidInput(format!("unknown risk level: {s}")))
    }
}

/// Domain-level carrier for a single roster row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    /// Opaque identifier, stable for the session. Numeric store ids are kept as text.
    ///
    /// The wire kind is not kept: a text id that reads as a canonical `u64` renders back as a
    /// number, so a quoted `"42"` is written as `42` while `"007"` stays text.
    pub id: String,

    pub name: NonEmptyText,

    pub age: Age,

    /// Free-text clinical description, e.g. "Prenatal Care".
    pub condition: String,

    /// Free-form date text as recorded, e.g. "12 Feb 2026".
    pub last_visit: String,

    pub status: PatientStatus,

    /// Last computed risk; a display default before triage runs.
    pub risk_level: RiskLevel,

    /// Externally set flag for an overdue or high-priority check-in.
    pub follow_up_urgent: bool,

    /// Display text such as "Overdue: 8 days".
    pub follow_up_due: Option<String>,

    pub phone: Option<String>,

    pub image: Option<String>,
}

// ============================================================================
// Public Roster operations
// ============================================================================

/// Roster document operations.
///
/// This is a zero-sized type used for namespacing roster-related operations.
pub struct Roster;

impl Roster {
    /// Parse a roster from YAML text.
    ///
    /// Schema mismatches are reported with the path of the failing field (for example
    /// `[2].age`).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Translation`] if the YAML does not match the roster schema,
    /// contains unknown keys, or carries out-of-range values.
    pub fn parse_yaml(yaml_text: &str) -> RosterResult<Vec<Patient>> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let rows = serde_path_to_error::deserialize::<_, Vec<PatientWire>>(deserializer)
            .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))?;

        rows_to_domain(rows)
    }

    /// Parse a roster from JSON text.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Roster::parse_yaml`].
    pub fn parse_json(json_text: &str) -> RosterResult<Vec<Patient>> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);
        let rows = serde_path_to_error::deserialize::<_, Vec<PatientWire>>(&mut deserializer)
            .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))?;

        rows_to_domain(rows)
    }

    /// Render a roster as YAML text.
    pub fn render_yaml(patients: &[Patient]) -> RosterResult<String> {
        let rows: Vec<PatientWire> = patients.iter().map(domain_to_wire).collect();
        Ok(serde_yaml::to_string(&rows)?)
    }

    /// Render a roster as pretty-printed JSON text.
    pub fn render_json(patients: &[Patient]) -> RosterResult<String> {
        let rows: Vec<PatientWire> = patients.iter().map(domain_to_wire).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Store ids are integers; seed files and other stores may use strings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
enum IdWire {
    Number(u64),
    Text(String),
}

/// Wire representation of a roster row.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct PatientWire {
    pub id: IdWire,
    pub name: NonEmptyText,
    pub age: Age,
    pub condition: String,
    pub last_visit: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub follow_up_urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn schema_mismatch(path: String, source: impl std::fmt::Display) -> RosterError {
    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    RosterError::Translation(format!("Roster schema mismatch at {path}: {source}"))
}

fn rows_to_domain(rows: Vec<PatientWire>) -> RosterResult<Vec<Patient>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| wire_to_domain(index, row))
        .collect()
}

/// Convert a wire row to the domain type, validating enumerated fields.
fn wire_to_domain(index: usize, wire: PatientWire) -> RosterResult<Patient> {
    let id = match wire.id {
        IdWire::Number(n) => n.to_string(),
        IdWire::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(RosterError::Translation(format!(
                    "Empty id in roster row [{index}]"
                )));
            }
            trimmed.to_string()
        }
    };

    let status = PatientStatus::from_wire(&wire.status).ok_or_else(|| {
        RosterError::Translation(format!(
            "Invalid status in roster row [{index}]: {}",
            wire.status
        ))
    })?;

    let risk_level = match wire.risk_level {
        Some(level) => RiskLevel::from_wire(&level).ok_or_else(|| {
            RosterError::Translation(format!(
                "Invalid riskLevel in roster row [{index}]: {level}"
            ))
        })?,
        None => RiskLevel::default(),
    };

    Ok(Patient {
        id,
        name: wire.name,
        age: wire.age,
        condition: wire.condition,
        last_visit: wire.last_visit,
        status,
        risk_level,
        follow_up_urgent: wire.follow_up_urgent,
        follow_up_due: wire.follow_up_due,
        phone: wire.phone,
        image: wire.image,
    })
}

/// Convert a domain patient to its wire row.
///
/// Canonical digit-only ids are emitted as numbers, matching the store.
fn domain_to_wire(patient: &Patient) -> PatientWire {
    let id = match patient.id.parse::<u64>() {
        Ok(n) if n.to_string() == patient.id => IdWire::Number(n),
        _ => IdWire::Text(patient.id.clone()),
    };

    PatientWire {
        id,
        name: patient.name.clone(),
        age: patient.age,
        condition: patient.condition.clone(),
        last_visit: patient.last_visit.clone(),
        status: patient.status.as_str().to_string(),
        risk_level: Some(patient.risk_level.as_str().to_string()),
        follow_up_urgent: patient.follow_up_urgent,
        follow_up_due: patient.follow_up_due.clone(),
        phone: patient.phone.clone(),
        image: patient.image.clone(),
    }
}
