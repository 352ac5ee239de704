use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { value: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { value, .. } => {
                write!(f, "cannot build a log filter from '{value}'")
            }
            TelemetryError::Init(err) => write!(f, "tracing subscriber refused to install: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = resolve_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

fn resolve_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
            value: config.log_level.clone(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_level_is_reported_with_the_offending_value() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "debug=whatever=extra".to_string(),
        };

        match resolve_filter(&config) {
            Err(TelemetryError::Filter { value, .. }) => {
                assert_eq!(value, "debug=whatever=extra");
            }
            other => panic!("expected a filter error, got {other:?}"),
        }
    }

    #[test]
    fn configured_level_is_used_when_no_env_override_exists() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "warn".to_string(),
        };

        assert!(resolve_filter(&config).is_ok());
    }
}
