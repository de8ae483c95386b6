//! Business logic use cases
//!
//! ```text
//! tokens ──► ResolveRequests ──► ResolutionSession ──► strategies ──► ports
//!                                      │
//!                                      ▼
//!                               ResolvedRequests
//! ```

pub mod resolve_requests;
