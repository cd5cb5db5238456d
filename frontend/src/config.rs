use std::time::Duration;
use thiserror::Error;

/// Delay before the Ocean Rescue card fades back in after a step change.
pub const DEFAULT_OVERLAY_REVEAL_MS: u64 = 2_500;

const MAX_OVERLAY_REVEAL_MS: u64 = 60_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid overlay reveal delay {raw:?}: {reason}")]
    InvalidDelay { raw: String, reason: &'static str },
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

pub fn parse_reveal_delay(raw: &str) -> Result<Duration, ConfigError> {
    let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidDelay {
        raw: raw.to_string(),
        reason: "not a whole number of milliseconds",
    })?;
    if ms == 0 || ms > MAX_OVERLAY_REVEAL_MS {
        return Err(ConfigError::InvalidDelay {
            raw: raw.to_string(),
            reason: "must be between 1 and 60000",
        });
    }
    Ok(Duration::from_millis(ms))
}

pub fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        _ => Err(ConfigError::UnknownLogLevel(raw.to_string())),
    }
}

/// Overlay reveal delay, overridable at build time with `REDRESS_OVERLAY_REVEAL_MS`.
pub fn get_overlay_reveal_delay() -> Duration {
    match option_env!("REDRESS_OVERLAY_REVEAL_MS") {
        Some(raw) => parse_reveal_delay(raw).unwrap_or_else(|e| {
            log::warn!("{}, using {}ms", e, DEFAULT_OVERLAY_REVEAL_MS);
            Duration::from_millis(DEFAULT_OVERLAY_REVEAL_MS)
        }),
        None => Duration::from_millis(DEFAULT_OVERLAY_REVEAL_MS),
    }
}

pub fn get_log_level() -> log::Level {
    let fallback = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Runs before the logger exists, so a bad value can't be reported here.
    option_env!("REDRESS_LOG_LEVEL")
        .and_then(|raw| parse_log_level(raw).ok())
        .unwrap_or(fallback)
}
