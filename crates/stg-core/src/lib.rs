//! # stg-core
//!
//! Core domain models and port definitions for resolving staging change requests.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod request;

// Re-export commonly used types at the crate root
pub use config::{ApiConfig, AppConfig, StagingConfig};
pub use ids::{ProjectName, RequestId, StagingArea};
pub use request::{
    is_numeric_token, parse_request_id, ActionSource, ActionTarget, RequestAction,
    RequestDocument, RequestState, ResolvedRequest, ResolvedRequests,
};
