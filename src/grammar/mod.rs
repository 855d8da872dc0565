//! Line grammars for the ecosystems the engine recognizes.
//!
//! A [`Grammar`] is a pure recognizer: it turns one console line into a
//! [`LineMatch`] or `None`. It never rewrites text; that is the job of the
//! customizer wrapping it.
//!
//! Sub-modules:
//! - [`java`]          - `JavaGrammar` (JVM exception traces)
//! - [`csharp`]        - `CSharpGrammar` (.NET traces and MSBuild/csc diagnostics)
//! - [`regex_helpers`] - compiled regex patterns (internal)

pub mod csharp;
pub mod java;
mod regex_helpers;

pub use csharp::CSharpGrammar;
pub use java::JavaGrammar;

use crate::types::LineMatch;

/// Recognizes the console line grammar of one source ecosystem.
///
/// Implementations must be `Send + Sync` so a single grammar can back
/// dispatchers owned by different threads.
pub trait Grammar: Send + Sync {
    /// Unique identifier for this ecosystem (e.g., "java", "csharp").
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// Classify a newline-stripped line. Returns `None` when no sub-pattern
    /// matches, or when a sub-pattern matches but a captured field is unusable
    /// (e.g. line number `0`).
    fn detect(&self, line: &str) -> Option<LineMatch>;
}

/// Look up a built-in grammar by ecosystem id.
pub fn builtin_grammar(id: &str) -> Option<Box<dyn Grammar>> {
    match id {
        "java" => Some(Box::new(JavaGrammar)),
        "csharp" => Some(Box::new(CSharpGrammar)),
        _ => None,
    }
}

/// Ids of every built-in grammar, in default registration order.
pub fn builtin_grammar_ids() -> &'static [&'static str] {
    &["java", "csharp"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        for id in builtin_grammar_ids() {
            let grammar = builtin_grammar(id).expect("built-in id resolves");
            assert_eq!(grammar.id(), *id);
        }
        assert!(builtin_grammar("cobol").is_none());
    }

    #[test]
    fn test_grammar_object_safety() {
        let grammars: Vec<Box<dyn Grammar>> = vec![Box::new(JavaGrammar), Box::new(CSharpGrammar)];
        assert_eq!(grammars.len(), 2);
    }
}
