//! Compound dispatcher: routes each line of one console stream to the
//! customizer that owns the trace in progress.
//!
//! Consecutive lines of one printed trace are not self-describing (`... 1 more`
//! carries no ecosystem marker), so the customizer that claimed the previous
//! line is asked first. On a miss every customizer is probed again in
//! registration order, which lets traces of different ecosystems interleave.
//!
//! One `CompoundCustomizer` belongs to one stream. Independent streams each get
//! their own instance; nothing is shared between them.

use crate::customizer::OutputCustomizer;
use crate::target::NavigationTarget;

/// Dispatcher state across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveCustomizer {
    /// No trace is being followed.
    #[default]
    Idle,
    /// The customizer at this registration index claimed the last line.
    Active(usize),
}

/// Outcome of processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedLine {
    /// Text to display (identical to the input when no customizer handled it).
    pub text: String,
    /// Id of the customizer that handled the line.
    pub customizer: Option<String>,
    /// Navigation target embedded in `text`.
    pub target: Option<NavigationTarget>,
}

impl ProcessedLine {
    fn passthrough(line: &str) -> Self {
        Self {
            text: line.to_string(),
            customizer: None,
            target: None,
        }
    }
}

/// Ordered collection of customizers plus the active-customizer state.
pub struct CompoundCustomizer {
    customizers: Vec<Box<dyn OutputCustomizer>>,
    state: ActiveCustomizer,
}

impl CompoundCustomizer {
    /// Create a dispatcher over `customizers`. Registration order breaks ties
    /// when a line fits more than one grammar (first registered wins).
    pub fn new(customizers: Vec<Box<dyn OutputCustomizer>>) -> Self {
        Self {
            customizers,
            state: ActiveCustomizer::Idle,
        }
    }

    /// Process one newline-stripped line and return the text to display.
    pub fn process(&mut self, line: &str) -> String {
        self.process_line(line).text
    }

    /// Process one line and report which customizer handled it and the
    /// embedded navigation target.
    ///
    /// A trailing `\r` (CRLF streams) is kept out of matching and re-appended.
    pub fn process_line(&mut self, line: &str) -> ProcessedLine {
        let (body, cr) = match line.strip_suffix('\r') {
            Some(body) => (body, "\r"),
            None => (line, ""),
        };
        let mut processed = self.dispatch(body);
        processed.text.push_str(cr);
        processed
    }

    fn dispatch(&mut self, line: &str) -> ProcessedLine {
        if let ActiveCustomizer::Active(index) = self.state
            && let Some(customizer) = self.customizers.get(index)
            && let Some(customized) = customizer.try_customize(line)
        {
            crate::debug_trace!(
                "DISPATCH",
                "active customizer {} kept line: {:?}",
                customizer.id(),
                line
            );
            return ProcessedLine {
                text: customized.text,
                customizer: Some(customizer.id().to_string()),
                target: customized.target,
            };
        }

        for (index, customizer) in self.customizers.iter().enumerate() {
            if let Some(customized) = customizer.try_customize(line) {
                if self.state != ActiveCustomizer::Active(index) {
                    crate::debug_log!(
                        "DISPATCH",
                        "customizer {} (index={}) became active on: {:?}",
                        customizer.id(),
                        index,
                        line
                    );
                }
                self.state = ActiveCustomizer::Active(index);
                return ProcessedLine {
                    text: customized.text,
                    customizer: Some(customizer.id().to_string()),
                    target: customized.target,
                };
            }
        }

        if self.state != ActiveCustomizer::Idle {
            crate::debug_trace!("DISPATCH", "no customizer claimed line, going idle");
        }
        self.state = ActiveCustomizer::Idle;
        ProcessedLine::passthrough(line)
    }

    /// Forget any trace in progress (stream cleared or restarted).
    pub fn reset(&mut self) {
        self.state = ActiveCustomizer::Idle;
    }

    pub fn state(&self) -> ActiveCustomizer {
        self.state
    }

    /// Id of the active customizer, if a trace is being followed.
    pub fn active(&self) -> Option<&str> {
        match self.state {
            ActiveCustomizer::Active(index) => self.customizers.get(index).map(|c| c.id()),
            ActiveCustomizer::Idle => None,
        }
    }

    /// Registered customizer ids, in probe order.
    pub fn customizer_ids(&self) -> Vec<&str> {
        self.customizers.iter().map(|c| c.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.customizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customizers.is_empty()
    }
}
