//! Business logic for each converter and for the smart-paste flow.
//!
//! Command modules are pure with respect to I/O: they take Rust values,
//! return `Result<CmdResult>`, and never print or exit. The CLI layer
//! decides how a `CmdResult` is rendered.

use crate::model::HistoryEntry;
use crate::router::PasteEvent;

pub mod base64;
pub mod config;
pub mod history;
pub mod json;
pub mod jwt;
pub mod paste;
pub mod regex;
pub mod timestamp;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced: converted text, a routing decision, history
/// entries, and/or status messages. Unused fields stay empty.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<String>,
    pub detection: Option<PasteEvent>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_detection(mut self, detection: PasteEvent) -> Self {
        self.detection = Some(detection);
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }
}
