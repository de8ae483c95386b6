//! Startup: configuration, logging and dependency wiring for the binary.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{resolve_runtime_config, Overrides, RuntimeConfig};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::wire_resolve_requests;
