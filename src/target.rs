//! Navigation targets: the structured action a rendered link carries.
//!
//! A target only describes where to go. Opening an editor is the business of
//! whoever renders the line and handles activation.

use serde::{Deserialize, Serialize};

use crate::types::LineMatch;

/// Action descriptor derived 1:1 from a location-bearing [`LineMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Open the file declaring `symbol` and go to `line` of `file`.
    OpenSymbol {
        symbol: String,
        file: String,
        line: u32,
    },
    /// Open `file` at `line`.
    OpenFile { file: String, line: u32 },
    /// Open `file` (resolved against `project`) at `line`/`column`.
    OpenProjectFile {
        file: String,
        project: Option<String>,
        line: u32,
        column: u32,
    },
}

impl NavigationTarget {
    /// Derive the target for a match. Location-less matches have none.
    ///
    /// Stack frames that name a symbol become `OpenSymbol`, other frames
    /// `OpenFile`; diagnostics become `OpenProjectFile` (column defaults to 1).
    pub fn from_match(m: &LineMatch) -> Option<Self> {
        match m {
            LineMatch::StackFrame(loc) => Some(match &loc.symbol {
                Some(symbol) => NavigationTarget::OpenSymbol {
                    symbol: symbol.clone(),
                    file: loc.file_path.clone(),
                    line: loc.line,
                },
                None => NavigationTarget::OpenFile {
                    file: loc.file_path.clone(),
                    line: loc.line,
                },
            }),
            LineMatch::CompilerDiagnostic(loc) => Some(NavigationTarget::OpenProjectFile {
                file: loc.file_path.clone(),
                project: loc.project_file.clone(),
                line: loc.line,
                column: loc.column.unwrap_or(1),
            }),
            LineMatch::TraceHeader | LineMatch::Continuation => None,
        }
    }

    pub fn file(&self) -> &str {
        match self {
            NavigationTarget::OpenSymbol { file, .. }
            | NavigationTarget::OpenFile { file, .. }
            | NavigationTarget::OpenProjectFile { file, .. } => file,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            NavigationTarget::OpenSymbol { line, .. }
            | NavigationTarget::OpenFile { line, .. }
            | NavigationTarget::OpenProjectFile { line, .. } => *line,
        }
    }
}
