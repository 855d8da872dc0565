//! Configuration value types: customizer toggles, anchor settings, log level.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_scheme() -> String {
    "javascript:".to_string()
}

fn default_open_symbol_call() -> String {
    "open".to_string()
}

fn default_open_file_call() -> String {
    "openCSSTL".to_string()
}

fn default_open_project_file_call() -> String {
    "openCSCM".to_string()
}

/// One entry in the ordered customizer list.
///
/// Order in the list is the probe order of the dispatcher: when a line could
/// belong to more than one ecosystem, the first enabled entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizerToggle {
    /// Ecosystem identifier (`java`, `csharp`).
    pub id: String,
    /// Whether this customizer takes part in dispatching.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl CustomizerToggle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
        }
    }
}

/// The built-in customizer order: Java first, then C#/.NET.
pub fn default_customizers() -> Vec<CustomizerToggle> {
    vec![CustomizerToggle::new("java"), CustomizerToggle::new("csharp")]
}

/// Settings for the action payload embedded in generated anchors.
///
/// The payload has the shape `<scheme><call>(<args>);`, so the defaults
/// produce `javascript:open("Sym", "File.java", 6);`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorConfig {
    /// Payload scheme prefix, including the trailing colon.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Call name for "open symbol at file:line" (Java frames).
    #[serde(default = "default_open_symbol_call")]
    pub open_symbol_call: String,
    /// Call name for "open file:line" (.NET frames).
    #[serde(default = "default_open_file_call")]
    pub open_file_call: String,
    /// Call name for "open file(line,col) for project" (compiler diagnostics).
    #[serde(default = "default_open_project_file_call")]
    pub open_project_file_call: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            open_symbol_call: default_open_symbol_call(),
            open_file_call: default_open_file_call(),
            open_project_file_call: default_open_project_file_call(),
        }
    }
}

/// Log level for the debug log file.
///
/// The `DEBUG_LEVEL` environment variable and `--log-level` CLI flag take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Parse a level name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}
