//! Logger initialization.
//!
//! Plain (colored) or JSON-lines output on stderr, so the JSON report on stdout stays clean.

use std::io::{IsTerminal, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (colored when stderr is a terminal) and JSON lines for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. This allows developers to
/// use `RUST_LOG=debug` for quick debugging while still supporting explicit
/// CLI control via `--log-level`.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Returns
///
/// `Ok(())` if initialization succeeds, or an error if logger setup fails.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug webpulse example.com
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug webpulse example.com --log-level info
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=webpulse=debug,reqwest=info webpulse example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(std::io::stderr().is_terminal());

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    // html5ever reports every malformed-markup recovery; audited pages are full of them
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module("webpulse", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => format!("{level:<5}").red(),
                    log::Level::Warn => format!("{level:<5}").yellow(),
                    log::Level::Info => format!("{level:<5}").green(),
                    log::Level::Debug => format!("{level:<5}").blue(),
                    log::Level::Trace => format!("{level:<5}").purple(),
                };

                writeln!(
                    buf,
                    "{} {} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    colored_level,
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    // try_init: tests may initialize the logger more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // env_logger can only be installed once per process. After the `try_init`
    // below a global logger is guaranteed to exist, whichever test got there first.

    #[test]
    fn test_init_logger_plain_format_after_existing_logger_fails() {
        let _ = env_logger::builder().is_test(true).try_init();
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_json_format_after_existing_logger_fails() {
        let _ = env_logger::builder().is_test(true).try_init();
        let err = init_logger_with(LevelFilter::Debug, LogFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("Logger initialization error"));
    }
}
