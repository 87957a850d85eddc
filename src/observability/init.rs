//! Logging initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an `EnvFilter` built from
//! the configured level and a plain-text `fmt` layer appending to the log
//! file in the plugin data directory.

use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the plugin data directory.
const LOG_FILE_NAME: &str = "zhelf.log";

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a pipeline that filters events by the configured level and appends
/// them, without ANSI styling, to `zhelf.log` in the plugin data directory.
///
/// # Level Resolution
///
/// 1. `config.log_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation or file opening fails
///   (logging is optional, the widget must keep working without it)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_logging(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}
