use crate::cli::LogFormat;
use anyhow::Result;
use tracing_subscriber::{fmt::time::SystemTime, EnvFilter};

/// Installs the global tracing subscriber. Logs are written to stderr so that stdout only
/// carries event bodies. `RUST_LOG` takes precedence over the verbosity flag.
pub fn initialise_tracing(verbose: bool, format: LogFormat) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_timer(SystemTime)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(false)
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
