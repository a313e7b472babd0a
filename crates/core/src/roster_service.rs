//! Loading the configured roster from disk.

use crate::config::CoreConfig;
use crate::{Patient, TriageError, TriageResult};
use roster::Roster;
use std::path::Path;
use std::sync::Arc;

/// Reads patient rosters from the file named in [`CoreConfig`].
#[derive(Clone)]
pub struct RosterService {
    cfg: Arc<CoreConfig>,
}

impl RosterService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Loads and validates the configured roster.
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns a `TriageError` if:
    /// - the file cannot be read,
    /// - any row fails roster validation.
    pub fn load(&self) -> TriageResult<Vec<Patient>> {
        load_roster_file(self.cfg.roster_path())
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }
}

/// Loads a roster file, choosing the format from its extension.
pub fn load_roster_file(path: &Path) -> TriageResult<Vec<Patient>> {
    let text = std::fs::read_to_string(path).map_err(|source| TriageError::RosterRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let patients = if is_json {
        Roster::parse_json(&text)?
    } else {
        Roster::parse_yaml(&text)?
    };

    tracing::info!(
        path = %path.display(),
        patients = patients.len(),
        "roster loaded"
    );
    Ok(patients)
}
