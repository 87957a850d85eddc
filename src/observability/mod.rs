//! Structured logging with file-based output.
//!
//! This module wires the `tracing` macros used throughout the plugin to a
//! `tracing-subscriber` pipeline writing to a log file under the plugin data
//! directory. Logging is optional: if the data directory cannot be created or
//! the file cannot be opened, the plugin runs silently.
//!
//! # Architecture
//!
//! ```text
//! tracing spans/events → EnvFilter → fmt layer → zhelf.log
//! ```
//!
//! # Configuration
//!
//! The filter level is controlled via the `log_level` plugin configuration
//! option (`trace`, `debug`, `info`, `warn`, `error`), defaulting to `"info"`.

mod init;

pub use init::init_logging;
