use roster::RosterError;

/// Errors raised around the triage engine: configuration, roster loading and lookups.
///
/// The engine operations themselves are total and never return these.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(
        "failed to read roster file (path: {path}): {source}",
        path = path.display()
    )]
    RosterRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),
    #[error("invalid reference date: {0}")]
    InvalidReferenceDate(String),
    #[error("patient not found: {0}")]
    PatientNotFound(String),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
