use std::{env, fs::OpenOptions};

use anyhow::{Context, Result};

/// Environment variable naming the log file.
pub const LOG_FILE_VAR: &str = "CHURN_FORM_LOG";
const DEFAULT_LOG_FILE: &str = "churn-form.log";

/// Sets up `env_logger` when `RUST_LOG` is present.
///
/// The terminal is owned by the TUI, so records go to a file instead of stderr.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = env::var(LOG_FILE_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    log::info!("logging to {path}");
    Ok(())
}
