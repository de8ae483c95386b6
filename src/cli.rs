use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "osc-staging")]
#[command(version, about = "Resolve staging request tokens into change requests", long_about = None)]
pub struct Cli {
    /// Config file (default: <config_dir>/osc-staging/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Master project, e.g. `Factory` or `openSUSE:Leap:15.6`
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve request numbers, package names or source projects
    Resolve {
        /// Only consider requests already placed in a staging area
        #[arg(long)]
        staged: bool,

        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_global_options() {
        let cli = Cli::try_parse_from([
            "osc-staging",
            "-p",
            "Leap:15.6",
            "resolve",
            "--staged",
            "vim",
            "12345",
        ])
        .unwrap();

        assert_eq!(cli.project.as_deref(), Some("Leap:15.6"));
        assert!(!cli.verbose);
        match cli.command {
            Commands::Resolve { staged, tokens } => {
                assert!(staged);
                assert_eq!(tokens, vec!["vim", "12345"]);
            }
        }
    }

    #[test]
    fn resolve_requires_a_token() {
        assert!(Cli::try_parse_from(["osc-staging", "resolve"]).is_err());
    }

    #[test]
    fn verbose_may_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["osc-staging", "resolve", "vim", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
