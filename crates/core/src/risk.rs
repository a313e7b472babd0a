//! Risk classification.
//!
//! Rules are evaluated in a fixed order and the first match wins. The order matters because the
//! rules overlap: a critical status beats everything, vulnerable age or a high-risk condition
//! beats the medium band.

use crate::constants::{ELDER_AGE_YEARS, MIDDLE_AGE_YEARS, UNDER_FIVE_AGE_YEARS};
use crate::keywords::{contains_any, HIGH_RISK_TERMS, MEDIUM_RISK_TERMS};
use crate::{Patient, PatientStatus, RiskLevel};

/// Classifies a patient into a [`RiskLevel`].
///
/// Only `status`, `age` and `condition` are consulted; the patient's current `risk_level` is
/// ignored. Condition keywords are matched case-insensitively as substrings.
pub fn classify_risk(patient: &Patient) -> RiskLevel {
    if patient.status == PatientStatus::Critical {
        return RiskLevel::High;
    }

    let age = patient.age.years();
    let condition = patient.condition.to_lowercase();

    if age > ELDER_AGE_YEARS
        || age < UNDER_FIVE_AGE_YEARS
        || contains_any(&condition, HIGH_RISK_TERMS)
    {
        return RiskLevel::High;
    }

    if age > MIDDLE_AGE_YEARS || contains_any(&condition, MEDIUM_RISK_TERMS) {
        return RiskLevel::Medium;
    }

    RiskLevel::Low
}
