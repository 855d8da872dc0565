//! C#/.NET grammar: runtime exception traces and compiler diagnostics.
//!
//! Recognized shapes:
//! - headers: `Unhandled Exception: Ns.Type: msg`, `Unhandled exception. Ns.Type: msg`,
//!   inner-exception separators ` ---> Ns.Type: msg`
//! - frames: `at Ns.Type.Method(Args) in /some path/File.cs:line N`
//! - continuations: `--- End of inner exception stack trace ---` and similar markers
//! - diagnostics: `path(line,col): error CS0234: msg [/path/app.csproj]`

use super::Grammar;
use super::regex_helpers::{
    re_csharp_diagnostic, re_csharp_end_marker, re_csharp_frame, re_csharp_header,
    re_csharp_inner_header,
};
use crate::types::{LineMatch, SourceLocation, parse_position};

/// Grammar for .NET runtime traces and csc/MSBuild diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpGrammar;

impl CSharpGrammar {
    fn detect_frame(line: &str) -> Option<LineMatch> {
        let caps = re_csharp_frame().captures(line)?;
        let path = caps.get(1)?;
        let line_no = caps.get(2)?;
        let number = parse_position(line_no.as_str())?;
        Some(LineMatch::StackFrame(SourceLocation {
            file_path: path.as_str().to_string(),
            line: number,
            column: None,
            project_file: None,
            symbol: None,
            span: path.start()..line_no.end(),
        }))
    }

    fn detect_diagnostic(line: &str) -> Option<LineMatch> {
        let caps = re_csharp_diagnostic().captures(line)?;
        let visible = caps.get(1)?;
        let path = caps.get(2)?;
        let number = parse_position(caps.get(3)?.as_str())?;
        let column = parse_position(caps.get(4)?.as_str())?;
        Some(LineMatch::CompilerDiagnostic(SourceLocation {
            file_path: path.as_str().to_string(),
            line: number,
            column: Some(column),
            project_file: caps.get(5).map(|m| m.as_str().to_string()),
            symbol: None,
            span: visible.range(),
        }))
    }
}

impl Grammar for CSharpGrammar {
    fn id(&self) -> &'static str {
        "csharp"
    }

    fn display_name(&self) -> &'static str {
        "C#/.NET"
    }

    fn detect(&self, line: &str) -> Option<LineMatch> {
        if re_csharp_frame().is_match(line) {
            let frame = Self::detect_frame(line);
            if frame.is_none() {
                crate::debug_trace!("GRAMMAR", ".NET frame with unusable capture: {:?}", line);
            }
            return frame;
        }
        if re_csharp_diagnostic().is_match(line) {
            let diagnostic = Self::detect_diagnostic(line);
            if diagnostic.is_none() {
                crate::debug_trace!("GRAMMAR", "diagnostic with unusable capture: {:?}", line);
            }
            return diagnostic;
        }
        if re_csharp_header().is_match(line) || re_csharp_inner_header().is_match(line) {
            return Some(LineMatch::TraceHeader);
        }
        if re_csharp_end_marker().is_match(line) {
            return Some(LineMatch::Continuation);
        }
        None
    }
}
