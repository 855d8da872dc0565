//! Console output customization engine.
//!
//! Inspects lines streamed from build/run/test processes, recognizes stack
//! trace and compiler diagnostic grammars of several ecosystems, and rewrites
//! matched lines so the location text becomes an anchor carrying a navigation
//! action (open file X at line Y, optionally a symbol or project).
//!
//! # Module Structure
//!
//! ## Recognition
//! - [`grammar`] - per-ecosystem line grammars (`JavaGrammar`, `CSharpGrammar`).
//! - [`types`] - `LineMatch`, `MatchKind`, `SourceLocation`.
//!
//! ## Encoding
//! - [`target`] - `NavigationTarget`, the structured action behind a link.
//! - [`encoder`] - `AnchorEncoder`: escaped action payloads and anchor markup.
//!
//! ## Dispatch
//! - [`customizer`] - `OutputCustomizer` trait and the grammar-backed implementation.
//! - [`compound`] - `CompoundCustomizer`: per-stream dispatcher that keeps a
//!   multi-line trace attributed to the ecosystem that opened it.
//! - [`config_bridge`] - builds a dispatcher from `tracelink_config::Config`.
//!
//! ## Support
//! - [`debug`] - file-based debug logging and the `debug_*!` macros.
//! - [`cli`] - argument parsing for the `tracelink` filter binary.

pub mod cli;
pub mod compound;
pub mod config_bridge;
pub mod customizer;
pub mod debug;
pub mod encoder;
pub mod grammar;
pub mod target;
pub mod types;

pub use compound::{ActiveCustomizer, CompoundCustomizer, ProcessedLine};
pub use config_bridge::{build_compound, build_customizers};
pub use customizer::{Customized, GrammarCustomizer, OutputCustomizer};
pub use encoder::{AnchorEncoder, escape_argument};
pub use grammar::{CSharpGrammar, Grammar, JavaGrammar};
pub use target::NavigationTarget;
pub use types::{LineMatch, MatchKind, SourceLocation};

/// Dispatcher with the built-in customizers (Java, then C#/.NET) and the
/// default anchor settings.
pub fn default_compound() -> CompoundCustomizer {
    build_compound(&tracelink_config::Config::default())
}
