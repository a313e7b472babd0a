//! Worklist ordering by clinical urgency.

use crate::Patient;
use std::cmp::Ordering;

/// Returns a copy of `patients` ordered by urgency. The input slice is left untouched.
///
/// Keys, each consulted only on a tie of the previous one:
/// 1. stored `risk_level`, highest first
/// 2. `follow_up_urgent` patients first
/// 3. `name`, ascending
///
/// The sort is stable, so patients equal on all three keys keep their input order.
pub fn prioritize(patients: &[Patient]) -> Vec<Patient> {
    let mut ordered = patients.to_vec();
    ordered.sort_by(urgency_order);
    ordered
}

/// Comparator behind [`prioritize`]; `Less` means `a` is seen first.
pub fn urgency_order(a: &Patient, b: &Patient) -> Ordering {
    b.risk_level
        .score()
        .cmp(&a.risk_level.score())
        .then_with(|| b.follow_up_urgent.cmp(&a.follow_up_urgent))
        .then_with(|| compare_names(a.name.as_str(), b.name.as_str()))
}

/// Case-insensitive name order with byte order as the final tie-break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{patient, urgent, with_risk};
    use crate::{PatientStatus::Active, RiskLevel};

    fn names(patients: &[Patient]) -> Vec<&str> {
        patients.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn equal_keys_sort_by_name() {
        let input = vec![
            with_risk(patient("Babita", 30, "x", Active), RiskLevel::Medium),
            with_risk(patient("Amit", 30, "x", Active), RiskLevel::Medium),
        ];
        assert_eq!(names(&prioritize(&input)), vec!["Amit", "Babita"]);
    }

    #[test]
    fn risk_dominates_urgency() {
        let input = vec![
            urgent(with_risk(patient("Aarav", 30, "x", Active), RiskLevel::Low)),
            with_risk(patient("Zoya", 30, "x", Active), RiskLevel::High),
            urgent(with_risk(patient("Meena", 30, "x", Active), RiskLevel::Medium)),
        ];
        assert_eq!(names(&prioritize(&input)), vec!["Zoya", "Meena", "Aarav"]);
    }

    #[test]
    fn urgent_follow_up_breaks_risk_ties() {
        let input = vec![
            with_risk(patient("Amit", 30, "x", Active), RiskLevel::High),
            urgent(with_risk(patient("Vikram", 30, "x", Active), RiskLevel::High)),
        ];
        assert_eq!(names(&prioritize(&input)), vec!["Vikram", "Amit"]);
    }

    #[test]
    fn name_order_ignores_case() {
        let input = vec![
            patient("babita", 30, "x", Active),
            patient("Chandra", 30, "x", Active),
            patient("Amit", 30, "x", Active),
        ];
        assert_eq!(names(&prioritize(&input)), vec!["Amit", "babita", "Chandra"]);
    }

    #[test]
    fn duplicate_names_keep_input_order() {
        let mut first = patient("Ravi", 30, "x", Active);
        first.id = "first".into();
        let mut second = patient("Ravi", 40, "y", Active);
        second.id = "second".into();

        let ordered = prioritize(&[first, second]);
        let ids: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![
            patient("Zara", 30, "x", Active),
            with_risk(patient("Amit", 30, "x", Active), RiskLevel::High),
        ];
        let snapshot = input.clone();
        let _ = prioritize(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn empty_list() {
        assert!(prioritize(&[]).is_empty());
    }
}
