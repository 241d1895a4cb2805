//! Logging utilities

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment key consulted when `RUST_LOG` is not set
pub const ENV_LOG_LEVEL: &str = "TEXTKIT_LOG_LEVEL";

/// Build the filter used by [`init_logging`]
///
/// `RUST_LOG` wins; otherwise `TEXTKIT_LOG_LEVEL`, defaulting to `info`.
pub fn env_filter() -> EnvFilter {
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string());
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global logging system
///
/// Installs a stderr formatter behind [`env_filter`]. If a global
/// subscriber is already set (for example by the host application), this
/// leaves it in place.
pub fn init_logging() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed; keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        // Second call must not panic.
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }

    #[test]
    fn test_env_filter_builds() {
        let filter = env_filter();
        assert!(!filter.to_string().is_empty());
    }
}
