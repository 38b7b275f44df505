//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber. The filter comes from `RUST_LOG`
//! when it is set and from the configured level otherwise.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{PayrollError, PayrollResult};

/// Builds the filter for the configured level, preferring `RUST_LOG`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global subscriber.
///
/// Returns `LoggingInit` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> PayrollResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| PayrollError::LoggingInit {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_installs_once() {
        for format in [LogFormat::Pretty, LogFormat::Json] {
            let config = LoggingConfig {
                format,
                ..LoggingConfig::default()
            };
            // Only the first install in the process succeeds
            match init_logging(&config) {
                Ok(()) | Err(PayrollError::LoggingInit { .. }) => {}
                Err(other) => panic!("Unexpected error for {:?}: {:?}", format, other),
            }
        }
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = LoggingConfig::default();
        // Another test may have installed a subscriber first; either way the
        // second call must fail.
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(PayrollError::LoggingInit { .. })
        ));
    }
}
