//! Worklist operations over an in-memory roster.
//!
//! Triage here means refreshing every patient's risk label and re-ordering the list by urgency.
//! Filtering and search back the risk tabs and search box of the patient list.

use crate::priority::prioritize;
use crate::risk::classify_risk;
use crate::{Patient, RiskLevel};

/// Reassesses each patient's risk and returns the worklist ordered by urgency.
///
/// The input is left untouched.
pub fn auto_triage(patients: &[Patient]) -> Vec<Patient> {
    let mut reassessed = patients.to_vec();
    let changed = reassess_in_place(&mut reassessed);
    tracing::info!(
        patients = reassessed.len(),
        changed,
        "auto-triage complete"
    );
    prioritize(&reassessed)
}

/// Overwrites each patient's `risk_level` with a fresh classification.
///
/// Returns how many labels changed.
pub fn reassess_in_place(patients: &mut [Patient]) -> usize {
    let mut changed = 0;
    for patient in patients.iter_mut() {
        let assessed = classify_risk(patient);
        if assessed != patient.risk_level {
            tracing::debug!(
                patient_id = %patient.id,
                from = %patient.risk_level,
                to = %assessed,
                "risk level changed"
            );
            patient.risk_level = assessed;
            changed += 1;
        }
    }
    changed
}

/// Keeps patients at the given risk level; `None` keeps everyone.
pub fn filter_by_risk(patients: &[Patient], risk: Option<RiskLevel>) -> Vec<Patient> {
    match risk {
        Some(level) => patients
            .iter()
            .filter(|p| p.risk_level == level)
            .cloned()
            .collect(),
        None => patients.to_vec(),
    }
}

/// Case-insensitive substring search over name, condition and status.
///
/// Surrounding whitespace in `query` is ignored, so `" sunita "` matches like `"sunita"`.
/// A blank query matches every patient.
pub fn search(patients: &[Patient], query: &str) -> Vec<Patient> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return patients.to_vec();
    }

    patients
        .iter()
        .filter(|p| {
            p.name.as_str().to_lowercase().contains(&query)
                || p.condition.to_lowercase().contains(&query)
                || p.status.as_str().to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

pub fn find_by_id<'a>(patients: &'a [Patient], id: &str) -> Option<&'a Patient> {
    patients.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{patient, urgent, with_risk};
    use crate::PatientStatus::{Active, Critical, Stable};

    fn roster() -> Vec<Patient> {
        vec![
            with_risk(patient("Priya Sharma", 28, "Prenatal Care", Active), RiskLevel::Low),
            urgent(patient("Rajesh Kumar", 45, "Diabetes Management", Stable)),
            patient("Meera Patel", 32, "Postnatal Care", Active),
            urgent(patient("Sunita Verma", 55, "Hypertension", Critical)),
            with_risk(patient("Arjun Singh", 8, "Child Vaccination", Active), RiskLevel::High),
        ]
    }

    #[test]
    fn auto_triage_reassesses_and_orders() {
        let input = roster();
        let triaged = auto_triage(&input);

        let view: Vec<(&str, RiskLevel)> = triaged
            .iter()
            .map(|p| (p.name.as_str(), p.risk_level))
            .collect();
        assert_eq!(
            view,
            vec![
                ("Sunita Verma", RiskLevel::High),
                ("Rajesh Kumar", RiskLevel::Medium),
                ("Priya Sharma", RiskLevel::Medium),
                ("Arjun Singh", RiskLevel::Low),
                ("Meera Patel", RiskLevel::Low),
            ]
        );
        assert_eq!(input, roster(), "input must not be mutated");
    }

    #[test]
    fn reassess_in_place_counts_changes() {
        let mut patients = roster();
        // Priya Low->Medium, Rajesh Low->Medium, Sunita Low->High, Arjun High->Low.
        assert_eq!(reassess_in_place(&mut patients), 4);
        assert_eq!(reassess_in_place(&mut patients), 0);
    }

    #[test]
    fn filter_none_means_all() {
        let patients = roster();
        assert_eq!(filter_by_risk(&patients, None).len(), patients.len());

        let high = filter_by_risk(&patients, Some(RiskLevel::High));
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].name.as_str(), "Arjun Singh");
    }

    #[test]
    fn search_matches_name_condition_and_status() {
        let patients = roster();
        assert_eq!(search(&patients, "sunita").len(), 1);
        assert_eq!(search(&patients, "CARE").len(), 2);
        assert_eq!(search(&patients, "critical").len(), 1);
        assert_eq!(search(&patients, "  ").len(), patients.len());
        assert!(search(&patients, "malaria").is_empty());
    }

    #[test]
    fn search_ignores_surrounding_whitespace() {
        let patients = roster();
        let found = search(&patients, "  Sunita ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_str(), "Sunita Verma");
        assert!(search(&patients, "sunita  verma").is_empty(), "inner spacing is kept");
    }

    #[test]
    fn find_by_id_returns_match() {
        let patients = roster();
        let found = find_by_id(&patients, "meera-patel").expect("present");
        assert_eq!(found.name.as_str(), "Meera Patel");
        assert!(find_by_id(&patients, "nobody").is_none());
    }
}
