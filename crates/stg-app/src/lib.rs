//! osc-staging application layer
//!
//! This crate contains the request resolution use cases. They depend only on
//! the ports in `stg-core`.

pub mod usecases;

pub use usecases::resolve_requests::{ResolutionMode, ResolveError, ResolveRequests};
