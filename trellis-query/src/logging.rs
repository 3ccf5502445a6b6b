//! Logging bootstrap for the builder crate.
//!
//! Structured logging controlled by environment variables:
//!
//! - `TRELLIS_DEBUG=true|1|yes` - enable debug logging
//! - `TRELLIS_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `TRELLIS_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! Internal code uses the standard `tracing` macros; nothing is emitted
//! unless a subscriber is installed. [`init`] installs one only when the
//! optional `tracing-subscriber` feature is enabled; otherwise subscriber
//! setup is left entirely to the host application.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `TRELLIS_DEBUG`.
///
/// Returns `true` if the variable is set to "true", "1", or "yes"
/// (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("TRELLIS_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `TRELLIS_LOG_LEVEL`.
///
/// Defaults to "debug" if `TRELLIS_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    if let Ok(level) = env::var("TRELLIS_LOG_LEVEL") {
        match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => {
                if is_debug_enabled() {
                    "debug"
                } else {
                    "warn"
                }
            }
        }
    } else if is_debug_enabled() {
        "debug"
    } else {
        "warn"
    }
}

/// Get the configured log format from `TRELLIS_LOG_FORMAT`.
///
/// Defaults to "json" for structured logging.
pub fn get_log_format() -> &'static str {
    env::var("TRELLIS_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the logging system.
///
/// Call once at application startup; subsequent calls are no-ops. Does
/// nothing unless `TRELLIS_DEBUG` or `TRELLIS_LOG_LEVEL` is set, and only
/// installs a subscriber when the `tracing-subscriber` feature is enabled.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("TRELLIS_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "trellis={level},trellis_query={level},trellis_expr={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match get_log_format() {
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                "pretty" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
            }

            tracing::info!(level, format = get_log_format(), "trellis logging initialized");
        }
    });
}

/// Initialize logging with a specific level.
///
/// # Safety
///
/// Modifies environment variables, which is unsafe in multi-threaded
/// programs. Call early, before spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: intended for program startup before threads are spawned.
    unsafe {
        env::set_var("TRELLIS_LOG_LEVEL", level);
    }
    init();
}
