//! # Format Detection
//!
//! The core of the smart-paste feature: given an arbitrary string, decide
//! which of the supported formats it most plausibly is.
//!
//! Detection is two-staged per format. A cheap structural test (shape
//! check, no allocation beyond what the regex engine needs) gates an
//! expensive semantic validator that actually decodes or parses the
//! candidate. An input may validly match several formats; the classifier
//! collects every match and picks the highest-confidence one, breaking
//! ties by rule-table order.
//!
//! `classify` is a pure function of its input: no I/O, no mutation, same
//! answer for the same string. Validation failures of any kind mean "not
//! this format" and never escape as errors.

pub mod rules;

use crate::model::Detection;
use rules::{DetectorSettings, RULES};

/// Runs the rule table over input text.
///
/// Stateless between calls; the only configuration is the threshold
/// settings captured at construction.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    settings: DetectorSettings,
}

impl Detector {
    pub fn new(settings: DetectorSettings) -> Self {
        Self { settings }
    }

    /// Classify `text`, returning the best-guess format or `None` when
    /// nothing matches. Empty and whitespace-only input short-circuits to
    /// `None` without evaluating any rule.
    pub fn classify(&self, text: &str) -> Option<Detection> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut best: Option<Detection> = None;
        for rule in RULES.iter() {
            if !(rule.structural)(text) {
                continue;
            }
            if !(rule.semantic)(text, &self.settings) {
                continue;
            }
            let candidate = Detection::new(rule.format, rule.confidence);
            // Strictly-greater keeps the first rule on a confidence tie.
            match best {
                Some(current) if candidate.confidence <= current.confidence => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

/// Classify with default settings.
pub fn classify(text: &str) -> Option<Detection> {
    Detector::default().classify(text)
}
