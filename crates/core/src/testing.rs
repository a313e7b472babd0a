//! Patient fixtures shared by the unit tests in this crate.

use crate::{Age, NonEmptyText, Patient, PatientStatus, RiskLevel};

pub(crate) fn patient(name: &str, age: u32, condition: &str, status: PatientStatus) -> Patient {
    Patient {
        id: name.to_lowercase().replace(' ', "-"),
        name: NonEmptyText::new(name).unwrap(),
        age: Age::new(age).unwrap(),
        condition: condition.to_string(),
        last_visit: "12 Feb 2026".to_string(),
        status,
        risk_level: RiskLevel::Low,
        follow_up_urgent: false,
        follow_up_due: None,
        phone: None,
        image: None,
    }
}

pub(crate) fn with_risk(mut patient: Patient, risk_level: RiskLevel) -> Patient {
    patient.risk_level = risk_level;
    patient
}

pub(crate) fn urgent(mut patient: Patient) -> Patient {
    patient.follow_up_urgent = true;
    patient
}
