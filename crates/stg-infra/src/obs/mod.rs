//! Build service (OBS) adapters for the request gateway and staging
//! directory ports.

mod client;
mod request_gateway;
mod staging_directory;
mod wire;

pub use client::ObsClient;
pub use request_gateway::ObsRequestGateway;
pub use staging_directory::ObsStagingDirectory;
