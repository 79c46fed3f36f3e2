//! Logging setup
//!
//! Events go to stderr so they never mix with results on stdout.
//! `RUST_LOG` overrides the level chosen by `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the filter for a verbosity level, honouring `RUST_LOG`
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber
pub fn init(verbosity: Verbosity) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose())
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
