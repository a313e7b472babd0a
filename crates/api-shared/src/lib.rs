//! # API Shared
//!
//! Shared request/response definitions for the VitaWeave APIs.
//!
//! Contains:
//! - JSON transport types (`types` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
