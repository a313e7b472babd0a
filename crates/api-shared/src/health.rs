use crate::types::HealthRes;

/// Simple health service shared by every VitaWeave API surface.
///
/// The triage engine holds no state, so liveness is the only thing to report.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "VitaWeave is alive".into(),
        }
    }
}
