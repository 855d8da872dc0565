//! Navigation target encoder: turns a [`NavigationTarget`] into the action
//! payload embedded in an anchor, and wraps visible text in that anchor.
//!
//! Payload shape: `<scheme><call>(<args>);`, e.g.
//! `javascript:open("org.test.Junk.main", "Junk.java", 6);`. The anchor puts
//! the payload in a single-quoted `href`, and every string argument sits in
//! double quotes, so both quote characters are escaped inside arguments.

use std::fmt::Write as _;
use std::ops::Range;

use tracelink_config::AnchorConfig;

use crate::target::NavigationTarget;

/// Builds action payloads and anchor markup for navigation targets.
#[derive(Debug, Clone, Default)]
pub struct AnchorEncoder {
    config: AnchorConfig,
}

impl AnchorEncoder {
    pub fn new(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// Encode the action payload for `target`.
    pub fn encode(&self, target: &NavigationTarget) -> String {
        let scheme = &self.config.scheme;
        match target {
            NavigationTarget::OpenSymbol { symbol, file, line } => format!(
                "{scheme}{}(\"{}\", \"{}\", {line});",
                self.config.open_symbol_call,
                escape_argument(symbol),
                escape_argument(file),
            ),
            NavigationTarget::OpenFile { file, line } => format!(
                "{scheme}{}(\"{}\",{line});",
                self.config.open_file_call,
                escape_argument(file),
            ),
            NavigationTarget::OpenProjectFile {
                file,
                project,
                line,
                column,
            } => {
                let project = match project {
                    Some(p) => format!("\"{}\"", escape_argument(p)),
                    None => "null".to_string(),
                };
                format!(
                    "{scheme}{}(\"{}\",{project},{line},{column});",
                    self.config.open_project_file_call,
                    escape_argument(file),
                )
            }
        }
    }

    /// Wrap `visible` in an anchor carrying the payload for `target`.
    /// The visible text is emitted unmodified.
    pub fn anchor(&self, target: &NavigationTarget, visible: &str) -> String {
        format!("<a href='{}'>{}</a>", self.encode(target), visible)
    }

    /// Replace `span` of `line` with an anchor; everything outside the span is
    /// copied byte-for-byte.
    ///
    /// Returns `None` if `span` is out of range or not on character boundaries.
    pub fn rewrite(
        &self,
        line: &str,
        span: Range<usize>,
        target: &NavigationTarget,
    ) -> Option<String> {
        let visible = line.get(span.clone())?;
        let mut out = String::with_capacity(line.len() + 64);
        out.push_str(&line[..span.start]);
        out.push_str(&self.anchor(target, visible));
        out.push_str(&line[span.end..]);
        Some(out)
    }
}

/// Escape a value for use inside a double-quoted argument of the payload.
///
/// Neither `"` (closes the argument) nor `'` (closes the `href` attribute)
/// survives; `&` is escaped so it cannot start a character reference.
pub fn escape_argument(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\x27"),
            '&' => out.push_str("\\x26"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> AnchorEncoder {
        AnchorEncoder::default()
    }

    #[test]
    fn test_open_symbol_payload() {
        let target = NavigationTarget::OpenSymbol {
            symbol: "org.test.Junk.main".to_string(),
            file: "Junk.java".to_string(),
            line: 6,
        };
        assert_eq!(
            encoder().encode(&target),
            r#"javascript:open("org.test.Junk.main", "Junk.java", 6);"#
        );
        assert_eq!(
            encoder().anchor(&target, "Junk.java:6"),
            r#"<a href='javascript:open("org.test.Junk.main", "Junk.java", 6);'>Junk.java:6</a>"#
        );
    }

    #[test]
    fn test_constructor_marker_not_escaped() {
        let target = NavigationTarget::OpenSymbol {
            symbol: "MyClass$ThrowInConstructor.<init>".to_string(),
            file: "MyClass.java".to_string(),
            line: 16,
        };
        assert_eq!(
            encoder().encode(&target),
            r#"javascript:open("MyClass$ThrowInConstructor.<init>", "MyClass.java", 16);"#
        );
    }

    #[test]
    fn test_open_file_payload() {
        let target = NavigationTarget::OpenFile {
            file: "/home/jeremy/projects/csharp/hwapp/Program.cs".to_string(),
            line: 10,
        };
        assert_eq!(
            encoder().encode(&target),
            r#"javascript:openCSSTL("/home/jeremy/projects/csharp/hwapp/Program.cs",10);"#
        );
    }

    #[test]
    fn test_open_project_file_payload() {
        let target = NavigationTarget::OpenProjectFile {
            file: "Program.cs".to_string(),
            project: Some("/home/jeremy/projects/csharp/hwapp/hwapp.csproj".to_string()),
            line: 2,
            column: 13,
        };
        assert_eq!(
            encoder().encode(&target),
            r#"javascript:openCSCM("Program.cs","/home/jeremy/projects/csharp/hwapp/hwapp.csproj",2,13);"#
        );

        let target = NavigationTarget::OpenProjectFile {
            file: "Program.cs".to_string(),
            project: None,
            line: 2,
            column: 13,
        };
        assert_eq!(
            encoder().encode(&target),
            r#"javascript:openCSCM("Program.cs",null,2,13);"#
        );
    }

    #[test]
    fn test_quotes_cannot_close_arguments() {
        let target = NavigationTarget::OpenFile {
            file: r#"/tmp/it's "odd"\x.cs"#.to_string(),
            line: 1,
        };
        let payload = encoder().encode(&target);
        assert_eq!(
            payload,
            r#"javascript:openCSSTL("/tmp/it\x27s \"odd\"\\x.cs",1);"#
        );
        assert!(!payload.contains('\''));
    }

    #[test]
    fn test_escape_argument_controls() {
        assert_eq!(escape_argument("a&b"), r"a\x26b");
        assert_eq!(escape_argument("tab\there"), r"tab\there");
        assert_eq!(escape_argument("bell\u{7}"), r"bell\u0007");
        assert_eq!(escape_argument("plain/Path.java"), "plain/Path.java");
    }

    #[test]
    fn test_custom_scheme_and_calls() {
        let encoder = AnchorEncoder::new(AnchorConfig {
            scheme: "ide:".to_string(),
            open_symbol_call: "sym".to_string(),
            open_file_call: "file".to_string(),
            open_project_file_call: "proj".to_string(),
        });
        let target = NavigationTarget::OpenFile {
            file: "a.cs".to_string(),
            line: 3,
        };
        assert_eq!(encoder.encode(&target), r#"ide:file("a.cs",3);"#);
    }

    #[test]
    fn test_rewrite_preserves_surroundings() {
        let line = "   at org.test.Junk.main(Junk.java:6)";
        let target = NavigationTarget::OpenSymbol {
            symbol: "org.test.Junk.main".to_string(),
            file: "Junk.java".to_string(),
            line: 6,
        };
        let out = encoder().rewrite(line, 25..36, &target).unwrap();
        assert_eq!(
            out,
            r#"   at org.test.Junk.main(<a href='javascript:open("org.test.Junk.main", "Junk.java", 6);'>Junk.java:6</a>)"#
        );
    }

    #[test]
    fn test_rewrite_rejects_bad_span() {
        let target = NavigationTarget::OpenFile {
            file: "a".to_string(),
            line: 1,
        };
        assert_eq!(encoder().rewrite("short", 2..40, &target), None);
        assert_eq!(encoder().rewrite("é", 1..2, &target), None);
    }
}
