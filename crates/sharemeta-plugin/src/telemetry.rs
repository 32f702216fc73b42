//! Tracing subscriber setup for hosts that do not install their own

use sharemeta_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber from the logging configuration
///
/// `RUST_LOG` directives are honoured on top of the configured level.
/// Returns `false` when a global subscriber was already set.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::from_default_env().add_directive(level(&config.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_level(true),
            )
            .try_init(),
    };

    if installed.is_err() {
        return false;
    }

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialised");
    true
}

/// Parse a configured level, falling back to INFO
pub fn level(name: &str) -> tracing::Level {
    match name.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
