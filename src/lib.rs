pub mod config;
pub mod errand;
pub mod error;
pub mod pricing;

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// command output on stdout stays clean.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
