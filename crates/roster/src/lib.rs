//! Patient roster wire/boundary support.
//!
//! A roster is the list of patient rows a community health worker carries: the rows come either
//! from the remote patient store or from the static seed list, as YAML or JSON documents using
//! the store's camelCase field names.
//!
//! This crate focuses on:
//! - the domain-level `Patient` carrier and its enumerations
//! - strict serialisation/deserialisation of roster documents
//! - translation between domain primitives and wire structs
//!
//! It has no knowledge of triage rules; those live in `vitaweave-core`.

pub mod patient;

pub use patient::{Patient, PatientStatus, RiskLevel, Roster};

/// Errors returned by the `roster` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`RosterError`].
pub type RosterResult<T> = Result<T, RosterError>;
