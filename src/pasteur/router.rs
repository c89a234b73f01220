//! # Paste Router
//!
//! Adapts the pure [`Detector`](crate::detect::Detector) into an
//! event-driven entry point. The host shell hands raw pasted text to
//! [`PasteRouter::process_content`]; the router classifies it, attaches
//! human-readable names, and delivers one [`PasteEvent`] to the registered
//! `on_detect` callback. Unrecognized content is never dropped: it routes
//! to the JSON formatter as a fallback at confidence zero.
//!
//! The router holds no detection state. Disabling it is a full
//! unsubscribe; while disabled, `process_content` does no work at all.
//! [`PasteRouter::analyze`] is the side-effect-free variant for previews.

use crate::detect::Detector;
use crate::error::PasteurError;
use crate::model::{Detection, Tool};

/// The enriched routing decision delivered to `on_detect`.
#[derive(Debug, Clone, PartialEq)]
pub struct PasteEvent {
    /// Echo of the pasted text.
    pub content: String,
    /// Format key, or `"unknown"` for the fallback route.
    pub format: String,
    /// Key of the tool the content routes to.
    pub tool: String,
    pub confidence: f64,
    pub display_name: String,
    pub tool_name: String,
}

impl PasteEvent {
    fn from_detection(content: &str, detection: &Detection) -> Self {
        Self {
            content: content.to_string(),
            format: detection.format.key().to_string(),
            tool: detection.tool.key().to_string(),
            confidence: detection.confidence,
            display_name: detection.format.display_name().to_string(),
            tool_name: detection.tool.display_name().to_string(),
        }
    }

    /// The route taken when no format matches: the JSON formatter, which
    /// degrades gracefully on arbitrary text.
    fn fallback(content: &str) -> Self {
        Self {
            content: content.to_string(),
            format: "unknown".to_string(),
            tool: Tool::Json.key().to_string(),
            confidence: 0.0,
            display_name: "Unknown Format".to_string(),
            tool_name: Tool::Json.display_name().to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.format == "unknown"
    }
}

type DetectCallback = Box<dyn Fn(&PasteEvent)>;
type ErrorCallback = Box<dyn Fn(&PasteurError)>;

/// Routes pasted text to the matching converter tool.
///
/// Instances are independent of each other; each owns its detector, its
/// callbacks, and its own enabled flag. Both callbacks default to no-ops.
pub struct PasteRouter {
    detector: Detector,
    enabled: bool,
    on_detect: Option<DetectCallback>,
    on_error: Option<ErrorCallback>,
}

impl PasteRouter {
    pub fn new(detector: Detector) -> Self {
        Self {
            detector,
            enabled: true,
            on_detect: None,
            on_error: None,
        }
    }

    pub fn with_on_detect(mut self, callback: impl Fn(&PasteEvent) + 'static) -> Self {
        self.on_detect = Some(Box::new(callback));
        self
    }

    pub fn with_on_error(mut self, callback: impl Fn(&PasteurError) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Classify `text` and deliver the enriched result to `on_detect`.
    ///
    /// Never panics and never returns an error: detection failures mean
    /// the fallback route, and an enrichment fault goes to `on_error`.
    /// Does nothing while the router is disabled.
    pub fn process_content(&self, text: &str) {
        if !self.enabled {
            return;
        }
        match self.enrich(text) {
            Ok(event) => {
                if let Some(callback) = &self.on_detect {
                    callback(&event);
                }
            }
            Err(err) => {
                if let Some(callback) = &self.on_error {
                    callback(&err);
                }
            }
        }
    }

    // Enrichment is currently infallible; the Result keeps any future
    // fault on the on_error channel instead of the caller's stack.
    fn enrich(&self, text: &str) -> crate::error::Result<PasteEvent> {
        Ok(match self.detector.classify(text) {
            Some(detection) => PasteEvent::from_detection(text, &detection),
            None => PasteEvent::fallback(text),
        })
    }

    /// Classify without invoking any callback. Works even while disabled,
    /// since it has no routing side effects.
    pub fn analyze(&self, text: &str) -> Option<Detection> {
        self.detector.classify(text)
    }
}
