//! Logging infrastructure for PassField
//!
//! Thin setup around `tracing-subscriber` plus helpers that keep password
//! values out of log output.

pub mod logger;

pub use logger::{
    init_logging, is_debug_enabled, is_logging_initialized, sanitize_log_message,
    set_debug_enabled, LogFormat, LogLevel, LoggingConfig,
};
