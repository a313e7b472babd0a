//! Narrative case summaries.
//!
//! Summaries are assembled from fixed template slots; no language model is involved. The exact
//! text (including the doubled full stop after non-high-risk conditions) is what the patient
//! screens render, so changes here are visible to users.

use crate::constants::{OVERDUE_VISIT_DAYS, RECENT_VISIT_DAYS};
use crate::visit_date::days_since_visit;
use crate::{Patient, PatientStatus, RiskLevel};
use chrono::{Local, NaiveDate};

/// Summarises a patient relative to today's local date.
pub fn summarize(patient: &Patient) -> String {
    summarize_on(patient, Local::now().date_naive())
}

/// Summarises a patient relative to `today`.
///
/// Deterministic for a given patient and date. Slots, in order:
/// 1. name and age
/// 2. condition, flagged when the stored risk is high
/// 3. critical status
/// 4. visit recency, only when overdue (> 30 days) or recent (< 3 days)
/// 5. one closing recommendation
pub fn summarize_on(patient: &Patient, today: NaiveDate) -> String {
    let mut summary = format!("{} is a {}-year-old patient ", patient.name, patient.age);

    if patient.risk_level == RiskLevel::High {
        summary.push_str(&format!(
            "diagnosed with {}. They are currently flagged as High Risk",
            patient.condition
        ));
    } else {
        summary.push_str(&format!("receiving care for {}.", patient.condition));
    }

    if patient.status == PatientStatus::Critical {
        summary.push_str(" and is in Critical status. ");
    } else {
        summary.push_str(". ");
    }

    let days = days_since_visit(&patient.last_visit, today);
    if days > OVERDUE_VISIT_DAYS {
        summary.push_str("It has been over a month since their last visit. ");
    } else if days < RECENT_VISIT_DAYS {
        if days == 0 {
            summary.push_str("They were last seen today. ");
        } else {
            summary.push_str(&format!("They were last seen {days} days ago. "));
        }
    }

    if patient.follow_up_urgent {
        summary.push_str("Urgent follow-up is required due to pending alerts. ");
    } else if matches!(patient.risk_level, RiskLevel::Medium | RiskLevel::High) {
        summary.push_str("Regular monitoring of vitals is recommended. ");
    } else {
        summary.push_str("Condition appears stable. Routine checks advised.");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{patient, urgent, with_risk};
    use crate::PatientStatus::{Active, Critical, Stable};

    fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn high_risk_critical_urgent() {
        let p = urgent(with_risk(
            patient("Sunita Verma", 55, "Hypertension", Critical),
            RiskLevel::High,
        ));
        assert_eq!(
            summarize_on(&p, feb(20)),
            "Sunita Verma is a 55-year-old patient diagnosed with Hypertension. \
             They are currently flagged as High Risk and is in Critical status. \
             Urgent follow-up is required due to pending alerts. "
        );
    }

    #[test]
    fn medium_risk_recent_visit() {
        let mut p = with_risk(patient("Priya Sharma", 28, "Prenatal Care", Active), RiskLevel::Medium);
        p.last_visit = "18 Feb 2026".into();
        assert_eq!(
            summarize_on(&p, feb(20)),
            "Priya Sharma is a 28-year-old patient receiving care for Prenatal Care.. \
             They were last seen 2 days ago. Regular monitoring of vitals is recommended. "
        );
    }

    #[test]
    fn low_risk_seen_today() {
        let mut p = patient("Meera Patel", 32, "Postnatal Care", Stable);
        p.last_visit = "20 Feb 2026".into();
        assert_eq!(
            summarize_on(&p, feb(20)),
            "Meera Patel is a 32-year-old patient receiving care for Postnatal Care.. \
             They were last seen today. Condition appears stable. Routine checks advised."
        );
    }

    #[test]
    fn overdue_visit_is_called_out() {
        let mut p = patient("Arjun Singh", 8, "Child Vaccination", Active);
        p.last_visit = "5 Jan 2026".into();
        let summary = summarize_on(&p, feb(20));
        assert!(summary.contains("It has been over a month since their last visit. "));
    }

    #[test]
    fn middle_distance_visit_has_no_recency_clause() {
        let mut p = patient("Kavita Nair", 38, "Anaemia Treatment", Stable);
        p.last_visit = "10 Feb 2026".into();
        let summary = summarize_on(&p, feb(20));
        assert!(!summary.contains("last seen"));
        assert!(!summary.contains("over a month"));
    }

    #[test]
    fn recency_thresholds_are_exclusive() {
        let mut p = patient("Kavita Nair", 38, "Anaemia Treatment", Stable);

        p.last_visit = "17 Feb 2026".into();
        assert_eq!(
            summarize_on(&p, feb(20)),
            "Kavita Nair is a 38-year-old patient receiving care for Anaemia Treatment.. \
             Condition appears stable. Routine checks advised.",
            "3 days is not recent"
        );

        p.last_visit = "21 Jan 2026".into();
        assert!(!summarize_on(&p, feb(20)).contains("over a month"), "30 days is not overdue");

        p.last_visit = "20 Jan 2026".into();
        assert!(summarize_on(&p, feb(20)).contains("It has been over a month since their last visit. "));
    }

    #[test]
    fn unparseable_visit_uses_fallback_branch() {
        let mut p = patient("Rajesh Kumar", 45, "Diabetes Management", Stable);
        p.last_visit = "sometime last year".into();
        let summary = summarize(&p);
        assert_eq!(
            summary,
            "Rajesh Kumar is a 45-year-old patient receiving care for Diabetes Management.. \
             Condition appears stable. Routine checks advised."
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let p = urgent(with_risk(patient("Amit", 70, "Stroke", Active), RiskLevel::High));
        assert_eq!(summarize_on(&p, feb(20)), summarize_on(&p, feb(20)));
    }
}
