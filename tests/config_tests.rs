//! Tests for building dispatchers from YAML configuration files.

use std::fs;

use tempfile::TempDir;
use tracelink::build_compound;
use tracelink_config::{Config, ConfigError, LogLevel};

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_custom_anchor_names_flow_into_output() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
anchor:
  scheme: "ide:"
  open_symbol_call: gotoSymbol
  open_file_call: gotoFile
  open_project_file_call: gotoProjectFile
log_level: debug
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);

    let mut compound = build_compound(&config);
    assert_eq!(
        compound.process("\tat a.B.c(B.java:12)"),
        concat!("\t", r#"at a.B.c(<a href='ide:gotoSymbol("a.B.c", "B.java", 12);'>B.java:12</a>)"#)
    );
    assert_eq!(
        compound.process("Foo.cs(3,4): warning CS0168: unused"),
        r#"<a href='ide:gotoProjectFile("Foo.cs",null,3,4);'>Foo.cs(3,4)</a>: warning CS0168: unused"#
    );
}

#[test]
fn test_disabled_customizer_is_not_probed() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
customizers:
  - id: java
    enabled: false
  - id: csharp
"#,
    );

    let mut compound = build_compound(&Config::load_from(&path).unwrap());
    assert_eq!(compound.customizer_ids(), vec!["csharp"]);

    let java_frame = "   at org.test.Junk.main(Junk.java:6)";
    assert_eq!(compound.process(java_frame), java_frame);
}

#[test]
fn test_customizer_order_follows_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
customizers:
  - id: csharp
  - id: java
"#,
    );

    let compound = build_compound(&Config::load_from(&path).unwrap());
    assert_eq!(compound.customizer_ids(), vec!["csharp", "java"]);
}

#[test]
fn test_unknown_customizer_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
customizers:
  - id: python
  - id: java
"#,
    );

    let compound = build_compound(&Config::load_from(&path).unwrap());
    assert_eq!(compound.customizer_ids(), vec!["java"]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "anchor:\n  scheme: javascript\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        Config::load_from(&dir.path().join("nope.yaml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_scheme_cannot_break_out_of_href() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "anchor:\n  scheme: \"x' onmouseover='alert(1)' data-x=':\"\n",
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("anchor.scheme"));
}
