//! Tracing configuration for osc-staging
//!
//! Logs go to stderr so stdout carries only the resolved JSON.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Build the default filter directives for tracing
///
/// `RUST_LOG` replaces these entirely when set.
fn build_filter_directives(verbose: bool) -> Vec<String> {
    vec![
        if verbose { "debug" } else { "info" }.to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
        if verbose { "stg_infra=debug" } else { "stg_infra=warn" }.to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(verbose).join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_follows_verbosity() {
        assert_eq!(build_filter_directives(false)[0], "info");
        assert_eq!(build_filter_directives(true)[0], "debug");
    }

    #[test]
    fn test_directives_form_a_valid_filter() {
        for verbose in [false, true] {
            let directives = build_filter_directives(verbose).join(",");
            assert!(EnvFilter::try_new(&directives).is_ok(), "{}", directives);
        }
    }

    #[test]
    fn test_http_stack_is_quiet_by_default() {
        let directives = build_filter_directives(false);
        assert!(directives.contains(&"reqwest=warn".to_string()));
        assert!(directives.contains(&"stg_infra=warn".to_string()));
    }
}
