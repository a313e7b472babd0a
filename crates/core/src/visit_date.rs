//! Last-visit date parsing.
//!
//! Seed rows record visits as `"12 Feb 2026"`; rows from the remote store may carry ISO-8601
//! dates. Anything else is treated as unknown and replaced by [`VISIT_FALLBACK_DAYS`] so that
//! summaries never fail.

use crate::constants::VISIT_FALLBACK_DAYS;
use chrono::NaiveDate;

/// Accepted `lastVisit` formats, tried in order.
const VISIT_DATE_FORMATS: &[&str] = &["%d %b %Y", "%Y-%m-%d"];

/// Parses a recorded visit date, returning `None` when no accepted format matches.
pub fn parse_visit_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    VISIT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Whole days between the recorded visit and `today`, in either direction.
///
/// Unparseable text yields [`VISIT_FALLBACK_DAYS`].
pub fn days_since_visit(last_visit: &str, today: NaiveDate) -> i64 {
    match parse_visit_date(last_visit) {
        Some(visited) => (today - visited).num_days().abs(),
        None => {
            tracing::warn!(
                last_visit,
                fallback_days = VISIT_FALLBACK_DAYS,
                "unparseable last visit date, using fallback"
            );
            VISIT_FALLBACK_DAYS
        }
    }
}
