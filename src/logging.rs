//! Structured logging setup for the `topopath` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable overriding the level selected on the command line.
pub const LOG_ENV: &str = "TOPOPATH_LOG";

/// Resolves the filter directive from the CLI flags.
///
/// An explicit level wins over `--verbose`; a bare level is scoped to this crate.
pub fn level_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("topopath={level}"),
        (true, None) => "topopath=debug".to_string(),
        (false, None) => "topopath=warn".to_string(),
    }
}

/// Initializes structured logging to stderr, so stdout only carries the report.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
