//! Logging utilities for the build pipeline
//!
//! This module is only available with the `logging` feature.
//!
//! Library users: the pipeline emits tracing events; install your own subscriber.
//! Build tools: use these convenience functions.

use std::sync::Once;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use kf_config::GlobalSettings;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Silent => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }

    /// Level named in `[settings]`, or the default when absent or invalid.
    pub fn from_settings(settings: &GlobalSettings) -> Self {
        settings
            .log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or_default()
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

/// Line layout of emitted events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One short line per event, no timestamp or target
    #[default]
    Compact,
    /// Timestamp, level and target on every line
    Full,
}

impl LogFormat {
    /// Format named in `[settings]`, or the default when absent or invalid.
    pub fn from_settings(settings: &GlobalSettings) -> Self {
        settings
            .log_format
            .as_deref()
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "full" => Ok(LogFormat::Full),
            other => Err(format!("Invalid log format: {}", other)),
        }
    }
}

/// Install a global subscriber at `level`. Only the first call in a process
/// takes effect; `RUST_LOG` directives still apply on top.
pub fn init_logging(level: LogLevel) {
    init_logging_with(level, LogFormat::default());
}

/// Install a global subscriber configured by `[settings]`.
pub fn init_logging_from_settings(settings: &GlobalSettings) {
    init_logging_with(
        LogLevel::from_settings(settings),
        LogFormat::from_settings(settings),
    );
}

fn init_logging_with(level: LogLevel, format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.level_filter().into())
            .from_env_lossy();
        install(filter, format);
    });
}

/// Initialize logging from `RUST_LOG`, falling back to info.
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter, LogFormat::default());
    });
}

fn install(filter: EnvFilter, format: LogFormat) {
    let (compact, full) = match format {
        LogFormat::Compact => (
            Some(fmt::layer().compact().with_target(false).without_time()),
            None,
        ),
        LogFormat::Full => (None, Some(fmt::layer().with_target(true))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(full)
        .init();
}
