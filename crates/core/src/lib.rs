//! # VitaWeave Core
//!
//! Clinical triage and recommendation engine for community health worker rosters.
//!
//! The engine is four pure, total functions over a [`Patient`]:
//! - [`classify_risk`]: High / Medium / Low from status, age and condition keywords
//! - [`prioritize`]: worklist ordering by risk, urgent follow-up, then name
//! - [`recommend_services`]: referral suggestions from a static catalogue
//! - [`summarize`]: a templated narrative paragraph
//!
//! Around it sit worklist helpers (auto-triage, filtering, search), roster loading and startup
//! configuration.
//!
//! **No API concerns**: HTTP handlers and command-line parsing belong in `api-rest` and `cli`.

pub mod config;
pub mod constants;
pub mod error;
mod keywords;
pub mod priority;
pub mod referral;
pub mod risk;
pub mod roster_service;
pub mod summary;
pub mod visit_date;
pub mod worklist;

#[cfg(test)]
mod testing;

pub use config::CoreConfig;
pub use error::{TriageError, TriageResult};
pub use priority::prioritize;
pub use referral::{recommend_services, ServiceRecommendation};
pub use risk::classify_risk;
pub use roster::{Patient, PatientStatus, RiskLevel};
pub use roster_service::RosterService;
pub use summary::{summarize, summarize_on};
pub use vitaweave_types::{Age, NonEmptyText};
pub use worklist::{auto_triage, filter_by_risk, find_by_id, search};
