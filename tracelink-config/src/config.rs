//! The top-level `Config` struct, YAML loading, and validation.
//!
//! Maps to `~/.config/tracelink/config.yaml`. Every field carries a serde
//! default so a partial file (or no file at all) yields a working config.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{AnchorConfig, CustomizerToggle, LogLevel, default_customizers};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ordered customizer list; order is the dispatcher's probe order.
    #[serde(default = "default_customizers")]
    pub customizers: Vec<CustomizerToggle>,

    /// Anchor payload settings.
    #[serde(default)]
    pub anchor: AnchorConfig,

    /// Log level for the debug log file.
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customizers: default_customizers(),
            anchor: AnchorConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("Config file not found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML text.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_scheme(&self.anchor.scheme) {
            return Err(ConfigError::Validation(format!(
                "anchor.scheme must be a scheme name followed by ':', got {:?}",
                self.anchor.scheme
            )));
        }

        for (field, value) in [
            ("anchor.open_symbol_call", &self.anchor.open_symbol_call),
            ("anchor.open_file_call", &self.anchor.open_file_call),
            (
                "anchor.open_project_file_call",
                &self.anchor.open_project_file_call,
            ),
        ] {
            if !is_identifier(value) {
                return Err(ConfigError::Validation(format!(
                    "{field} must be an identifier, got {value:?}"
                )));
            }
        }

        let mut seen = HashSet::new();
        for toggle in &self.customizers {
            if !seen.insert(toggle.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "customizer '{}' is listed more than once",
                    toggle.id
                )));
            }
        }

        Ok(())
    }

    /// Ids of the enabled customizers, in probe order.
    pub fn enabled_customizers(&self) -> impl Iterator<Item = &str> {
        self.customizers
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.id.as_str())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("tracelink")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("tracelink")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

/// True for `[A-Za-z][A-Za-z0-9+.-]*:`, a URI scheme with its colon.
fn is_scheme(scheme: &str) -> bool {
    let Some(name) = scheme.strip_suffix(':') else {
        return false;
    };
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}

/// True for names usable as a call in the payload: `[A-Za-z_$][A-Za-z0-9_$]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.enabled_customizers().collect::<Vec<_>>(),
            vec!["java", "csharp"]
        );
        assert_eq!(config.anchor.scheme, "javascript:");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("log_level: debug\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.customizers, default_customizers());
        assert_eq!(config.anchor, AnchorConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_customizer_order_and_toggles() {
        let yaml = "customizers:\n  - id: csharp\n  - id: java\n    enabled: false\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.enabled_customizers().collect::<Vec<_>>(), vec!["csharp"]);
    }

    #[test]
    fn test_duplicate_customizer_rejected() {
        let yaml = "customizers:\n  - id: java\n  - id: java\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_call_name_rejected() {
        let yaml = "anchor:\n  open_symbol_call: \"open(\"\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("anchor.open_symbol_call"));
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let yaml = "anchor:\n  scheme: javascript\n";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_scheme_with_quote_rejected() {
        let yaml = "anchor:\n  scheme: \"x' onmouseover='alert(1)' data-x=':\"\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("anchor.scheme"));

        for scheme in [":", "1ab:", "java script:", "ja\"va:", "javascript::"] {
            let mut config = Config::default();
            config.anchor.scheme = scheme.to_string();
            assert!(config.validate().is_err(), "{scheme}");
        }
        for scheme in ["javascript:", "ide:", "vscode-file:", "x.y+z:"] {
            let mut config = Config::default();
            config.anchor.scheme = scheme.to_string();
            assert!(config.validate().is_ok(), "{scheme}");
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = Config::from_yaml("customizers: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "anchor:\n  scheme: \"ide:\"\n  open_file_call: openFile").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.anchor.scheme, "ide:");
        assert_eq!(config.anchor.open_file_call, "openFile");
        assert_eq!(config.anchor.open_symbol_call, "open");
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_order() {
        let mut config = Config::default();
        config.customizers.reverse();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("openCSCM"));
        assert!(is_identifier("$nav_1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1open"));
        assert!(!is_identifier("open file"));
    }
}
