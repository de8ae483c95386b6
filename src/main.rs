use std::process::ExitCode;

use clap::Parser;
use osc_staging_lib::bootstrap::init_tracing_subscriber;
use osc_staging_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing_subscriber(cli.verbose) {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    let found = match osc_staging_lib::run(cli).await {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&found) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}
