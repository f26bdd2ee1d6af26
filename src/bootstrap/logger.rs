//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the environment snapshot is taken so
//! `LOG_LEVEL` from `data/.env` is honoured.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Level used when neither the CLI nor `LOG_LEVEL` says otherwise.
pub const DEFAULT_LEVEL: &str = "info";

/// Pick the effective level: a CLI `-v` level beats `LOG_LEVEL`, which beats
/// [`DEFAULT_LEVEL`]. The flag is `true` when the CLI forced the level, and is
/// meant to be passed as `prefer_level` to [`init`].
pub fn select_level<'a>(cli_level: Option<&'a str>, env_level: Option<&'a str>) -> (&'a str, bool) {
    match cli_level {
        Some(level) => (level, true),
        None => (env_level.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LEVEL), false),
    }
}

/// Initialise the global tracing subscriber, writing to stderr.
///
/// If `prefer_level` is `true`, `level` takes precedence and `RUST_LOG` is only
/// used as a fallback when `level` is invalid. If `prefer_level` is `false`,
/// `RUST_LOG` takes precedence and `level` is the fallback.
pub fn init(level: &str, prefer_level: bool) -> Result<(), AppError> {
    let filter = if prefer_level {
        match EnvFilter::try_new(level) {
            Ok(filter) => filter,
            Err(level_err) => EnvFilter::try_from_default_env().map_err(|env_err| {
                AppError::Logger(format!(
                    "invalid log level '{level}': {level_err}; RUST_LOG parse failed: {env_err}"
                ))
            })?,
        }
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}
