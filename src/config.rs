use std::time::Duration;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "dualsum";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tracing filter directive (same syntax as `RUST_LOG`).
pub const LOG_ENV_VAR: &str = "DUALSUM_LOG";
/// Override for the simulated service delay, in milliseconds.
pub const PROCESSING_DELAY_ENV_VAR: &str = "DUALSUM_PROCESSING_DELAY_MS";
/// Override for the progress step interval, in milliseconds.
pub const STEP_INTERVAL_ENV_VAR: &str = "DUALSUM_STEP_INTERVAL_MS";

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 400;

/// Debug builds log more verbosely.
pub fn is_dev() -> bool {
    cfg!(debug_assertions)
}

/// Filter used when `DUALSUM_LOG` is unset or unparsable.
pub fn default_log_filter() -> &'static str {
    if is_dev() {
        "dualsum_lib=debug,dualsum=debug"
    } else {
        "dualsum_lib=info,dualsum=info"
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} is not a whole number of milliseconds")]
    InvalidMillis { var: &'static str, value: String },
}

/// Timing knobs for the simulated processing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Artificial delay the service waits before producing a result.
    pub processing_delay: Duration,
    /// Time between scripted progress steps.
    pub step_interval: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
        }
    }
}

impl SummarizerConfig {
    /// Defaults, overridden by `DUALSUM_PROCESSING_DELAY_MS` / `DUALSUM_STEP_INTERVAL_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            processing_delay: parse_millis(
                PROCESSING_DELAY_ENV_VAR,
                lookup(PROCESSING_DELAY_ENV_VAR),
                DEFAULT_PROCESSING_DELAY_MS,
            )?,
            step_interval: parse_millis(
                STEP_INTERVAL_ENV_VAR,
                lookup(STEP_INTERVAL_ENV_VAR),
                DEFAULT_STEP_INTERVAL_MS,
            )?,
        })
    }

    /// Zero delays, for scripted runs and `--no-delay`.
    pub fn without_delays() -> Self {
        Self {
            processing_delay: Duration::ZERO,
            step_interval: Duration::ZERO,
        }
    }
}

fn parse_millis(
    var: &'static str,
    raw: Option<String>,
    default_ms: u64,
) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_millis(default_ms)),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidMillis { var, value }),
    }
}
