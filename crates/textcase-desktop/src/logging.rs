use tracing_subscriber::EnvFilter;

use crate::config::{DesktopConfig, LogFormat};

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init(config: &DesktopConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_from(config));

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
    }
}

/// Invalid directives fall back to `info` rather than aborting startup.
pub fn filter_from(config: &DesktopConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
}
