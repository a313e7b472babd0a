//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Library code never reads environment variables; binaries read them and hand the raw values
//! to the helpers here.

use crate::constants::DEFAULT_ROSTER_PATH;
use crate::{TriageError, TriageResult};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    roster_path: PathBuf,
    reference_date: Option<NaiveDate>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `reference_date` pins "today" for summaries; `None` uses the local calendar date.
    pub fn new(roster_path: PathBuf, reference_date: Option<NaiveDate>) -> TriageResult<Self> {
        if !roster_path.is_file() {
            return Err(TriageError::InvalidInput(format!(
                "roster path is not a file: {}",
                roster_path.display()
            )));
        }

        Ok(Self {
            roster_path,
            reference_date,
        })
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    /// The date summaries are computed against.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Resolve the roster file without reading environment variables.
///
/// If `override_path` is provided, it must be an existing file. Otherwise this looks for
/// `roster/patients.yaml` relative to the current working directory and then walks up from
/// `CARGO_MANIFEST_DIR`.
pub fn resolve_roster_path(override_path: Option<PathBuf>) -> TriageResult<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        return Err(TriageError::InvalidInput(format!(
            "VITAWEAVE_ROSTER override is not a readable file: {}",
            path.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_ROSTER_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_ROSTER_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(TriageError::InvalidInput(format!(
        "could not locate {DEFAULT_ROSTER_PATH}"
    )))
}

/// Parse an optional `YYYY-MM-DD` override of today's date.
///
/// If `value` is `None` or empty/whitespace, returns `None`.
pub fn reference_date_from_env_value(value: Option<String>) -> TriageResult<Option<NaiveDate>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value
        .map(|v| {
            NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .map_err(|e| TriageError::InvalidReferenceDate(format!("{v}: {e}")))
        })
        .transpose()
}
