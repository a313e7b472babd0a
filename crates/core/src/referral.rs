//! Referral recommendations.
//!
//! Each rule is checked independently against the lower-cased text `"{condition} {risk_level}"`,
//! so one patient can collect several referrals. Output follows the rule order below.
//!
//! | Rule | Trigger | Referral(s) |
//! |---|---|---|
//! | Emergency | critical, accident, stroke, heart, "high risk" | [`EMERGENCY_TRANSPORT`] |
//! | Maternal | prenatal, pregnant, maternity | [`MATERNAL_BENEFIT_SCHEME`], [`TELE_GYNAECOLOGY`] |
//! | Chronic | diabetes, hypertension, sugar, bp | [`NCD_CLINIC`] |
//! | Child care | age under 5, vaccin | [`VACCINATION_TRACKER`] |
//! | Infection | fever, flu, dengue, malaria | [`FEVER_CLINIC`] |

use crate::constants::UNDER_FIVE_AGE_YEARS;
use crate::keywords::{
    contains_any, CHRONIC_TERMS, EMERGENCY_TERMS, FEVER_TERMS, MATERNAL_TERMS, VACCINATION_TERMS,
};
use crate::Patient;

/// A suggested follow-up service from the static referral catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceRecommendation {
    /// Stable catalogue key.
    pub id: &'static str,
    pub title: &'static str,
    pub reason: &'static str,
    /// Display icon key.
    pub icon: &'static str,
}

pub const EMERGENCY_TRANSPORT: ServiceRecommendation = ServiceRecommendation {
    id: "emergency",
    title: "Call Ambulance (108)",
    reason: "High risk condition detected. Immediate transport may be required.",
    icon: "ambulance",
};

/// Janani Suraksha Yojana maternal benefit scheme.
pub const MATERNAL_BENEFIT_SCHEME: ServiceRecommendation = ServiceRecommendation {
    id: "scheme_jsy",
    title: "Janani Suraksha Yojana",
    reason: "Eligible for maternal health benefits under JSY scheme.",
    icon: "file-text",
};

pub const TELE_GYNAECOLOGY: ServiceRecommendation = ServiceRecommendation {
    id: "tele_gynae",
    title: "Gynaecologist Tele-consult",
    reason: "Regular screening recommended for prenatal care.",
    icon: "video",
};

/// Non-communicable disease clinic.
pub const NCD_CLINIC: ServiceRecommendation = ServiceRecommendation {
    id: "ncd_clinic",
    title: "NCD Clinic Referral",
    reason: "Requires regular monitoring for chronic condition.",
    icon: "activity",
};

pub const VACCINATION_TRACKER: ServiceRecommendation = ServiceRecommendation {
    id: "vaccine_camp",
    title: "Vaccination Tracker",
    reason: "Child under 5. Check immunization schedule.",
    icon: "syringe",
};

pub const FEVER_CLINIC: ServiceRecommendation = ServiceRecommendation {
    id: "fever_clinic",
    title: "Fever Clinic Visit",
    reason: "Symptoms indicate possible infection. Screen for vector-borne diseases.",
    icon: "thermometer",
};

/// Every catalogue entry, in rule order.
pub const CATALOGUE: &[ServiceRecommendation] = &[
    EMERGENCY_TRANSPORT,
    MATERNAL_BENEFIT_SCHEME,
    TELE_GYNAECOLOGY,
    NCD_CLINIC,
    VACCINATION_TRACKER,
    FEVER_CLINIC,
];

/// Suggests follow-up services for a patient.
///
/// Uses the patient's stored `risk_level`, so run triage first if the label may be stale.
pub fn recommend_services(patient: &Patient) -> Vec<ServiceRecommendation> {
    let text = format!("{} {}", patient.condition, patient.risk_level).to_lowercase();
    let mut recommendations = Vec::new();

    if contains_any(&text, EMERGENCY_TERMS) {
        recommendations.push(EMERGENCY_TRANSPORT);
    }

    if contains_any(&text, MATERNAL_TERMS) {
        recommendations.push(MATERNAL_BENEFIT_SCHEME);
        recommendations.push(TELE_GYNAECOLOGY);
    }

    if contains_any(&text, CHRONIC_TERMS) {
        recommendations.push(NCD_CLINIC);
    }

    if patient.age.years() < UNDER_FIVE_AGE_YEARS || contains_any(&text, VACCINATION_TERMS) {
        recommendations.push(VACCINATION_TRACKER);
    }

    if contains_any(&text, FEVER_TERMS) {
        recommendations.push(FEVER_CLINIC);
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{patient, with_risk};
    use crate::{PatientStatus::Active, PatientStatus::Critical, RiskLevel};

    fn ids(recommendations: &[ServiceRecommendation]) -> Vec<&'static str> {
        recommendations.iter().map(|r| r.id).collect()
    }

    #[test]
    fn routine_low_risk_patient_gets_nothing() {
        let p = with_risk(patient("A", 30, "Routine Checkup", Active), RiskLevel::Low);
        assert!(recommend_services(&p).is_empty());
    }

    #[test]
    fn multiple_rules_fire_in_declaration_order() {
        let p = with_risk(
            patient("Priya", 28, "Prenatal Care, Fever", Active),
            RiskLevel::Medium,
        );
        let recommendations = recommend_services(&p);
        assert_eq!(
            ids(&recommendations),
            vec!["scheme_jsy", "tele_gynae", "fever_clinic"]
        );
    }

    #[test]
    fn bare_high_label_does_not_call_ambulance() {
        let p = with_risk(patient("Sunita", 55, "Hypertension", Critical), RiskLevel::High);
        assert_eq!(ids(&recommend_services(&p)), vec!["ncd_clinic"]);
    }

    #[test]
    fn high_risk_phrase_in_condition_calls_ambulance() {
        let p = with_risk(
            patient("Lata", 31, "High Risk Prenatal Care", Active),
            RiskLevel::Medium,
        );
        assert_eq!(
            ids(&recommend_services(&p)),
            vec!["emergency", "scheme_jsy", "tele_gynae"]
        );
    }

    #[test]
    fn emergency_keywords() {
        for condition in ["Road accident", "Stroke recovery", "Heart Failure", "Critical burns"] {
            let p = patient("A", 30, condition, Active);
            assert_eq!(
                recommend_services(&p).first(),
                Some(&EMERGENCY_TRANSPORT),
                "{condition}"
            );
        }
    }

    #[test]
    fn chronic_shorthands_match() {
        for condition in ["High sugar", "BP check", "Diabetes Management"] {
            let p = patient("A", 40, condition, Active);
            assert!(recommend_services(&p).contains(&NCD_CLINIC), "{condition}");
        }
    }

    #[test]
    fn under_five_gets_vaccination_tracker_without_keyword() {
        let p = patient("Baby", 3, "Routine Checkup", Active);
        assert_eq!(recommend_services(&p), vec![VACCINATION_TRACKER]);
    }

    #[test]
    fn vaccination_keyword_for_older_child() {
        let p = patient("Arjun", 8, "Child Vaccination", Active);
        assert_eq!(recommend_services(&p), vec![VACCINATION_TRACKER]);
    }

    #[test]
    fn fever_family_keywords() {
        for condition in ["Influenza", "Suspected Malaria", "Dengue"] {
            let p = patient("A", 30, condition, Active);
            assert!(recommend_services(&p).contains(&FEVER_CLINIC), "{condition}");
        }
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let mut seen: Vec<&str> = CATALOGUE.iter().map(|r| r.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), CATALOGUE.len());
    }
}
