//! Bridges between YAML configuration types and the runtime dispatcher.
//!
//! Converts a `tracelink_config::Config` into a ready-to-use
//! [`CompoundCustomizer`]: one customizer per enabled ecosystem, in the
//! configured order, all sharing the configured anchor encoder.

use tracelink_config::Config;

use crate::compound::CompoundCustomizer;
use crate::customizer::{GrammarCustomizer, OutputCustomizer};
use crate::encoder::AnchorEncoder;
use crate::grammar::{builtin_grammar, builtin_grammar_ids};

/// Build the customizer list described by `config`.
///
/// Unknown ecosystem ids are logged and skipped.
pub fn build_customizers(config: &Config) -> Vec<Box<dyn OutputCustomizer>> {
    let encoder = AnchorEncoder::new(config.anchor.clone());
    let mut customizers: Vec<Box<dyn OutputCustomizer>> = Vec::new();

    for id in config.enabled_customizers() {
        match builtin_grammar(id) {
            Some(grammar) => {
                crate::debug_info!("CONFIG", "registered customizer {}", id);
                customizers.push(Box::new(GrammarCustomizer::new(grammar, encoder.clone())));
            }
            None => {
                crate::debug_error!(
                    "CONFIG",
                    "unknown customizer id '{}' (known: {}), skipping",
                    id,
                    builtin_grammar_ids().join(", ")
                );
            }
        }
    }

    customizers
}

/// Create a dispatcher for one console stream from `config`.
pub fn build_compound(config: &Config) -> CompoundCustomizer {
    CompoundCustomizer::new(build_customizers(config))
}
