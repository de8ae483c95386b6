pub mod bootstrap;
pub mod cli;

use stg_app::ResolveRequests;
use stg_core::ResolvedRequests;
use tracing::{info_span, Instrument};

use bootstrap::{resolve_runtime_config, wire_resolve_requests, Overrides};
use cli::{Cli, Commands};

/// Run one command end to end and return the resolved requests.
pub async fn run(cli: Cli) -> anyhow::Result<ResolvedRequests> {
    let config = resolve_runtime_config(Overrides::from_cli(cli.config, cli.project))?;
    let use_case = wire_resolve_requests(&config)?;
    execute(&use_case, cli.command).await
}

/// Dispatch `command` against an already wired use case.
pub async fn execute(
    use_case: &ResolveRequests,
    command: Commands,
) -> anyhow::Result<ResolvedRequests> {
    match command {
        Commands::Resolve { staged, tokens } => {
            let span = info_span!("command.resolve", staged, tokens = tokens.len());
            let found = async {
                if staged {
                    use_case.resolve_scoped(&tokens).await
                } else {
                    use_case.resolve(&tokens).await
                }
            }
            .instrument(span)
            .await?;
            Ok(found)
        }
    }
}
