//! Structured logging setup for the command-line front end.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Installs the global subscriber, writing to stderr so stdout stays
/// reserved for converter output. Returns `false` if one was already set.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        let config = LoggingConfig::default();
        init_logging(&config);
        assert!(!init_logging(&config));
    }
}
