//! Keyword tables for condition text matching.
//!
//! Conditions are free text, not a controlled vocabulary. Every table is matched as a
//! lower-case substring, so "feverish" matches `fever` and "heart-healthy diet" matches `heart`.
//! Callers lower-case the haystack once; the tables are already lower-case.

/// Condition terms that put a non-critical patient in the high risk band.
pub(crate) const HIGH_RISK_TERMS: &[&str] = &["heart", "stroke", "severe", "dengue"];

/// Condition terms that put a patient in at least the medium risk band.
pub(crate) const MEDIUM_RISK_TERMS: &[&str] = &[
    "diabetes",
    "hypertension",
    "pregnant",
    "prenatal",
    "asthma",
    "fever",
];

/// Terms in condition + risk text that warrant emergency transport.
///
/// `high risk` is a two-word phrase; a bare `high` risk label does not match it.
pub(crate) const EMERGENCY_TERMS: &[&str] = &["critical", "accident", "stroke", "heart", "high risk"];

pub(crate) const MATERNAL_TERMS: &[&str] = &["prenatal", "pregnant", "maternity"];

/// Chronic (non-communicable) disease terms, including the local shorthands `sugar` and `bp`.
pub(crate) const CHRONIC_TERMS: &[&str] = &["diabetes", "hypertension", "sugar", "bp"];

pub(crate) const VACCINATION_TERMS: &[&str] = &["vaccin"];

pub(crate) const FEVER_TERMS: &[&str] = &["fever", "flu", "dengue", "malaria"];

/// Returns true when `haystack` contains any of `terms` as a substring.
///
/// `haystack` must already be lower-case.
pub(crate) fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_substrings_not_words() {
        assert!(contains_any("feverish since monday", FEVER_TERMS));
        assert!(contains_any("heart-healthy diet", HIGH_RISK_TERMS));
        assert!(contains_any("influenza", FEVER_TERMS));
    }

    #[test]
    fn high_risk_phrase_needs_both_words() {
        assert!(!contains_any("hypertension high", EMERGENCY_TERMS));
        assert!(contains_any("high risk pregnancy medium", EMERGENCY_TERMS));
    }

    #[test]
    fn empty_haystack_matches_nothing() {
        assert!(!contains_any("", HIGH_RISK_TERMS));
    }
}
