//! Constants used throughout the VitaWeave core crate.
//!
//! Age thresholds, the visit-date fallback and default paths live here so the rule modules and
//! configuration agree on them.

/// Default roster location, relative to the working directory or a workspace ancestor.
pub const DEFAULT_ROSTER_PATH: &str = "roster/patients.yaml";

/// Patients strictly older than this are high risk.
pub const ELDER_AGE_YEARS: u32 = 65;

/// Patients strictly younger than this are high risk and qualify for the vaccination tracker.
pub const UNDER_FIVE_AGE_YEARS: u32 = 5;

/// Patients strictly older than this are at least medium risk.
pub const MIDDLE_AGE_YEARS: u32 = 50;

/// Days assumed since the last visit when the recorded date cannot be parsed.
pub const VISIT_FALLBACK_DAYS: i64 = 5;

/// Visits further back than this many days are called out as overdue in summaries.
pub const OVERDUE_VISIT_DAYS: i64 = 30;

/// Visits fewer than this many days ago are called out as recent in summaries.
pub const RECENT_VISIT_DAYS: i64 = 3;
