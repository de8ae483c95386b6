pub mod config;
pub mod obs;

pub use obs::{ObsClient, ObsRequestGateway, ObsStagingDirectory};
pub use config::{default_config_path, load_config};
