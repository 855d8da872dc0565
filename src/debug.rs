//! Debug logging for tracelink
//!
//! Controlled by the DEBUG_LEVEL environment variable:
//! - 0 or unset: No debugging
//! - 1: Errors only
//! - 2: Info level (configuration, registration)
//! - 3: Debug level (dispatcher transitions)
//! - 4: Trace level (every line, rejected captures)
//!
//! All output goes to /tmp/tracelink_debug.log on Unix/macOS,
//! or %TEMP%\tracelink_debug.log on Windows.
//! Nothing is written to stdout/stderr: stdout carries the rewritten lines.

use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use tracelink_config::LogLevel;

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Option<Self> {
        let val = std::env::var("DEBUG_LEVEL").ok()?;
        match val.trim().parse::<u8>() {
            Ok(0) => Some(DebugLevel::Off),
            Ok(1) => Some(DebugLevel::Error),
            Ok(2) => Some(DebugLevel::Info),
            Ok(3) => Some(DebugLevel::Debug),
            Ok(4) => Some(DebugLevel::Trace),
            _ => None,
        }
    }

    /// Map a configured log level; warnings share the error slot.
    pub fn from_log_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => DebugLevel::Off,
            LogLevel::Error | LogLevel::Warn => DebugLevel::Error,
            LogLevel::Info => DebugLevel::Info,
            LogLevel::Debug => DebugLevel::Debug,
            LogLevel::Trace => DebugLevel::Trace,
        }
    }

    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Warn,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Global debug logger
struct DebugLogger {
    level: DebugLevel,
    file: Option<std::fs::File>,
}

impl DebugLogger {
    fn new() -> Self {
        let mut logger = DebugLogger {
            level: DebugLevel::Off,
            file: None,
        };
        logger.set_level(DebugLevel::from_env().unwrap_or(DebugLevel::Off));
        logger
    }

    fn set_level(&mut self, level: DebugLevel) {
        self.level = level;
        if level == DebugLevel::Off || self.file.is_some() {
            return;
        }

        match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            Ok(f) => {
                self.file = Some(f);
                self.write_raw(&format!(
                    "\n{}\ntracelink debug session started at {} (level={:?})\n{}\n",
                    "=".repeat(80),
                    get_timestamp(),
                    level,
                    "=".repeat(80)
                ));
            }
            Err(_e) => {
                // Silently fail: logging must never disturb the output stream.
            }
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn log(&mut self, level: DebugLevel, category: &str, msg: &str) {
        if level <= self.level {
            let timestamp = get_timestamp();
            let level_str = match level {
                DebugLevel::Error => "ERROR",
                DebugLevel::Info => "INFO ",
                DebugLevel::Debug => "DEBUG",
                DebugLevel::Trace => "TRACE",
                DebugLevel::Off => return,
            };
            self.write_raw(&format!(
                "[{}] [{}] [{}] {}\n",
                timestamp, level_str, category, msg
            ));
        }
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

fn get_logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| Mutex::new(DebugLogger::new()))
}

fn log_path() -> std::path::PathBuf {
    #[cfg(unix)]
    {
        std::path::PathBuf::from("/tmp/tracelink_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("tracelink_debug.log")
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Check if debugging is enabled at given level
pub fn is_enabled(level: DebugLevel) -> bool {
    let logger = get_logger().lock();
    level <= logger.level
}

/// Log a message at specified level
pub fn log(level: DebugLevel, category: &str, msg: &str) {
    let mut logger = get_logger().lock();
    logger.log(level, category, msg);
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    if is_enabled(level) {
        log(level, category, &format!("{}", args));
    }
}

/// Routes `log` crate records into the debug log file.
struct LogBridge;

static LOG_BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        is_enabled(level_for(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            log(
                level_for(record.level()),
                record.target(),
                &format!("{}", record.args()),
            );
        }
    }

    fn flush(&self) {}
}

fn level_for(level: log::Level) -> DebugLevel {
    match level {
        log::Level::Error | log::Level::Warn => DebugLevel::Error,
        log::Level::Info => DebugLevel::Info,
        log::Level::Debug => DebugLevel::Debug,
        log::Level::Trace => DebugLevel::Trace,
    }
}

/// Initialize logging.
///
/// `DEBUG_LEVEL` in the environment wins over `configured`. Also installs a
/// `log` crate logger so `log::info!()` etc. from dependencies land in the
/// same file. Safe to call more than once; only the first bridge install
/// takes effect.
pub fn init_log_bridge(configured: LogLevel) {
    let level = DebugLevel::from_env().unwrap_or_else(|| DebugLevel::from_log_level(configured));
    get_logger().lock().set_level(level);
    if log::set_logger(&LOG_BRIDGE).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

// Convenience macros for logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
