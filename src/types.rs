//! Shared data types: the result of applying a grammar to one console line.

use std::ops::Range;

/// Classification of a recognized line, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// First line of a trace (exception type and message). No location.
    TraceHeader,
    /// A line that belongs to an ongoing trace but carries no location
    /// (e.g. `... 1 more`).
    Continuation,
    /// A stack frame with a source position.
    StackFrame,
    /// A compiler error or warning with a source position.
    CompilerDiagnostic,
}

impl MatchKind {
    /// Whether lines of this kind are rewritten with a navigation anchor.
    pub fn has_location(self) -> bool {
        matches!(self, MatchKind::StackFrame | MatchKind::CompilerDiagnostic)
    }
}

/// A source position extracted from a stack frame or compiler diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File path exactly as printed (simple name, relative or absolute path).
    pub file_path: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (diagnostics only).
    pub column: Option<u32>,
    /// Project file the diagnostic was reported for.
    pub project_file: Option<String>,
    /// Qualified symbol (`pkg.Class.method`), kept verbatim including markers
    /// such as `<init>`.
    pub symbol: Option<String>,
    /// Byte range of the location-bearing text inside the original line.
    /// This text becomes the visible part of the anchor.
    pub span: Range<usize>,
}

/// Structured result of applying a grammar to a line.
///
/// Location-less kinds carry no location, so a link can only ever be
/// produced for `StackFrame` and `CompilerDiagnostic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    TraceHeader,
    Continuation,
    StackFrame(SourceLocation),
    CompilerDiagnostic(SourceLocation),
}

impl LineMatch {
    pub fn kind(&self) -> MatchKind {
        match self {
            LineMatch::TraceHeader => MatchKind::TraceHeader,
            LineMatch::Continuation => MatchKind::Continuation,
            LineMatch::StackFrame(_) => MatchKind::StackFrame,
            LineMatch::CompilerDiagnostic(_) => MatchKind::CompilerDiagnostic,
        }
    }

    /// The source location, for location-bearing kinds.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            LineMatch::StackFrame(loc) | LineMatch::CompilerDiagnostic(loc) => Some(loc),
            LineMatch::TraceHeader | LineMatch::Continuation => None,
        }
    }
}

/// Parse a captured line/column number, rejecting zero and overflow.
pub(crate) fn parse_position(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|n| *n > 0)
}
