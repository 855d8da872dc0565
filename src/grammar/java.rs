//! Java/JVM exception trace grammar.
//!
//! Recognized shapes:
//! - headers: `pkg.FooException: msg`, `Caused by: ...`, `Suppressed: ...`,
//!   `Exception in thread "main" ...`
//! - frames: `at pkg.Class.method(File.java:N)`, with optional module or
//!   class-loader prefix (`java.base/`, `app//`)
//! - continuations: `... N more`, `... N common frames omitted`, and frames
//!   without a source position (`(Native Method)`, `(Unknown Source)`)

use super::Grammar;
use super::regex_helpers::{
    re_java_elision, re_java_frame, re_java_frame_no_source, re_java_header,
};
use crate::types::{LineMatch, SourceLocation, parse_position};

/// Grammar for JVM stack traces as printed by `Throwable.printStackTrace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaGrammar;

impl JavaGrammar {
    fn detect_frame(line: &str) -> Option<Option<LineMatch>> {
        let caps = re_java_frame().captures(line)?;
        let (Some(class), Some(method), Some(file), Some(line_no)) =
            (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
        else {
            return Some(None);
        };
        let Some(number) = parse_position(line_no.as_str()) else {
            crate::debug_trace!("GRAMMAR", "java frame with unusable line number: {:?}", line);
            return Some(None);
        };
        Some(Some(LineMatch::StackFrame(SourceLocation {
            file_path: file.as_str().to_string(),
            line: number,
            column: None,
            project_file: None,
            symbol: Some(format!("{}{}", class.as_str(), method.as_str())),
            span: file.start()..line_no.end(),
        })))
    }
}

impl Grammar for JavaGrammar {
    fn id(&self) -> &'static str {
        "java"
    }

    fn display_name(&self) -> &'static str {
        "Java"
    }

    fn detect(&self, line: &str) -> Option<LineMatch> {
        // A frame-shaped line with a bad capture is rejected outright rather
        // than falling through to the location-less patterns.
        if let Some(frame) = Self::detect_frame(line) {
            return frame;
        }
        if re_java_elision().is_match(line) || re_java_frame_no_source().is_match(line) {
            return Some(LineMatch::Continuation);
        }
        if re_java_header().is_match(line) {
            return Some(LineMatch::TraceHeader);
        }
        None
    }
}
