//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `webpulse` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the JSON report, or serving `POST /audit` with `--serve`
//!
//! Exit codes: 0 on success, 1 when the page is unreachable or the run fails,
//! 2 for input errors.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use webpulse::initialization::init_logger_with;
use webpulse::server::start_server;
use webpulse::{Auditor, Config};

const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT_ERROR: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = config.scoring() {
        eprintln!("webpulse error: {e}");
        process::exit(EXIT_INPUT_ERROR);
    }
    let auditor = Auditor::from_config(&config)?;

    if let Some(port) = config.serve {
        let audit_timeout = Duration::from_secs(config.audit_timeout_seconds);
        return start_server(&config.bind, port, Arc::new(auditor), audit_timeout).await;
    }

    // clap guarantees a URL whenever --serve is absent
    let url = config.url.as_deref().unwrap_or_default();
    match auditor.audit(url).await {
        Ok(report) => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("Failed to serialize audit report")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("webpulse error: {e}");
            let code = if e.is_input_error() {
                EXIT_INPUT_ERROR
            } else {
                EXIT_FAILURE
            };
            process::exit(code);
        }
    }
}
