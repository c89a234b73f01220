use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The textual formats the detector can recognize.
///
/// This is a closed enumeration: every key, display name, and tool route is
/// an exhaustive `match`, so adding a format is a compile-checked,
/// single-point change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Jwt,
    Json,
    UnixTimestamp,
    Regex,
    Base64,
}

impl Format {
    pub fn key(&self) -> &'static str {
        match self {
            Format::Jwt => "jwt",
            Format::Json => "json",
            Format::UnixTimestamp => "unixTimestamp",
            Format::Regex => "regex",
            Format::Base64 => "base64",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Format::Jwt => "JWT Token",
            Format::Json => "JSON",
            Format::UnixTimestamp => "Unix Timestamp",
            Format::Regex => "Regular Expression",
            Format::Base64 => "Base64",
        }
    }

    /// The converter tool this format routes to. Most formats route to the
    /// tool of the same name; `UnixTimestamp` routes to the timestamp tool.
    pub fn tool(&self) -> Tool {
        match self {
            Format::Jwt => Tool::Jwt,
            Format::Json => Tool::Json,
            Format::UnixTimestamp => Tool::Timestamp,
            Format::Regex => Tool::Regex,
            Format::Base64 => Tool::Base64,
        }
    }
}

/// The five converter tools of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Json,
    Jwt,
    Base64,
    Timestamp,
    Regex,
}

impl Tool {
    pub fn key(&self) -> &'static str {
        match self {
            Tool::Json => "json",
            Tool::Jwt => "jwt",
            Tool::Base64 => "base64",
            Tool::Timestamp => "timestamp",
            Tool::Regex => "regex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Json => "JSON Formatter",
            Tool::Jwt => "JWT Decoder",
            Tool::Base64 => "Base64 Converter",
            Tool::Timestamp => "Timestamp Converter",
            Tool::Regex => "Regex Tester",
        }
    }
}

/// A single classification verdict: the winning format, the tool it routes
/// to, and the fixed confidence of the matching rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub format: Format,
    pub tool: Tool,
    pub confidence: f64,
}

impl Detection {
    pub fn new(format: Format, confidence: f64) -> Self {
        Self {
            format,
            tool: format.tool(),
            confidence,
        }
    }
}

/// A recorded smart-paste detection.
///
/// Format and tool are stored as string keys (not the enums) because the
/// fallback route carries the synthetic "unknown" format, which is not a
/// member of [`Format`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub preview: String,
    pub format: String,
    pub tool: String,
    pub confidence: f64,
    pub detected_at: DateTime<Utc>,
}

const PREVIEW_LEN: usize = 80;

impl HistoryEntry {
    pub fn new(content: &str, format: &str, tool: &str, confidence: f64) -> Self {
        let preview: String = content
            .chars()
            .take(PREVIEW_LEN)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        Self {
            id: Uuid::new_v4(),
            preview,
            format: format.to_string(),
            tool: tool.to_string(),
            confidence,
            detected_at: Utc::now(),
        }
    }
}
