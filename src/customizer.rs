//! Output customizers: one per ecosystem, each pairing a [`Grammar`] with an
//! [`AnchorEncoder`].

use crate::encoder::AnchorEncoder;
use crate::grammar::{CSharpGrammar, Grammar, JavaGrammar};
use crate::target::NavigationTarget;
use crate::types::LineMatch;

/// Result of customizing a line the customizer could handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customized {
    /// The line to display: unchanged for headers/continuations, rewritten
    /// with an anchor for frames and diagnostics.
    pub text: String,
    /// The navigation target embedded in `text`, if any.
    pub target: Option<NavigationTarget>,
}

/// Recognizes and rewrites console lines of one ecosystem.
///
/// Implementations must be `Send + Sync` for use across threads. They hold no
/// per-stream state; cross-line state lives in the dispatcher.
pub trait OutputCustomizer: Send + Sync {
    /// Unique identifier (e.g., "java", "csharp").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn display_name(&self) -> &str;

    /// Whether this customizer recognizes the line as part of one of its
    /// traces. True for headers and continuations too, even though those are
    /// returned unchanged.
    fn can_customize(&self, line: &str) -> bool;

    /// Customize a line. Lines the customizer cannot handle come back unchanged.
    fn customize(&self, line: &str) -> String;

    /// `can_customize` and `customize` in one pass, with the embedded target.
    /// Returns `None` when the line is not handled.
    fn try_customize(&self, line: &str) -> Option<Customized> {
        if self.can_customize(line) {
            Some(Customized {
                text: self.customize(line),
                target: None,
            })
        } else {
            None
        }
    }
}

/// Customizer backed by a [`Grammar`].
pub struct GrammarCustomizer {
    grammar: Box<dyn Grammar>,
    encoder: AnchorEncoder,
}

impl GrammarCustomizer {
    pub fn new(grammar: Box<dyn Grammar>, encoder: AnchorEncoder) -> Self {
        Self { grammar, encoder }
    }

    /// Customizer for JVM stack traces.
    pub fn java(encoder: AnchorEncoder) -> Self {
        Self::new(Box::new(JavaGrammar), encoder)
    }

    /// Customizer for .NET stack traces and C# compiler diagnostics.
    pub fn csharp(encoder: AnchorEncoder) -> Self {
        Self::new(Box::new(CSharpGrammar), encoder)
    }

    /// Apply a match to the line. A location span the encoder cannot use is
    /// treated like no match at all.
    fn apply(&self, line: &str, m: &LineMatch) -> Option<Customized> {
        let (Some(location), Some(target)) = (m.location(), NavigationTarget::from_match(m)) else {
            return Some(Customized {
                text: line.to_string(),
                target: None,
            });
        };
        let text = self.encoder.rewrite(line, location.span.clone(), &target)?;
        Some(Customized {
            text,
            target: Some(target),
        })
    }
}

impl OutputCustomizer for GrammarCustomizer {
    fn id(&self) -> &str {
        self.grammar.id()
    }

    fn display_name(&self) -> &str {
        self.grammar.display_name()
    }

    fn can_customize(&self, line: &str) -> bool {
        self.try_customize(line).is_some()
    }

    fn customize(&self, line: &str) -> String {
        match self.try_customize(line) {
            Some(customized) => customized.text,
            None => line.to_string(),
        }
    }

    fn try_customize(&self, line: &str) -> Option<Customized> {
        let m = self.grammar.detect(line)?;
        self.apply(line, &m)
    }
}

impl std::fmt::Debug for GrammarCustomizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarCustomizer")
            .field("grammar", &self.grammar.id())
            .field("encoder", &self.encoder)
            .finish()
    }
}
