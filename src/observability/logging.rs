//! Structured logging.
//!
//! # Responsibilities
//! - Install the global tracing subscriber for the binary
//! - Pick the filter: `RUST_LOG` first, then the configured default
//!
//! # Design Decisions
//! - Library code only emits events; the subscriber is the binary's choice
//! - Pretty format for development, compact for log collectors
//! - Logs go to stderr; stdout carries response bodies

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogConfig, LogFormat};

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    }
}
