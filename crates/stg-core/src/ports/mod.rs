//! Port interfaces for the application layer
//!
//! Ports define the contract between the resolution use cases and the
//! infrastructure that talks to the build service. Use cases depend on these
//! traits only, so they can be driven by in-memory fakes in tests.

pub mod errors;
pub mod request_gateway;
pub mod staging_directory;

pub use errors::GatewayError;
pub use request_gateway::RequestGatewayPort;
pub use staging_directory::StagingDirectoryPort;
