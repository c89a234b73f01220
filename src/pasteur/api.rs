//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! pasteur operation regardless of the client driving it. It dispatches,
//! it normalizes, and it returns structured `Result<CmdResult>` values.
//! Business logic lives in `commands/*.rs`; presentation lives in the CLI.
//!
//! `PasteurApi<S: PrefStore>` is generic over the persistence backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::config::PasteurConfig;
use crate::detect::Detector;
use crate::error::Result;
use crate::model::Detection;
use crate::store::PrefStore;
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for pasteur operations.
pub struct PasteurApi<S: PrefStore> {
    store: S,
    config: PasteurConfig,
    config_dir: PathBuf,
}

impl<S: PrefStore> PasteurApi<S> {
    pub fn new(store: S, config: PasteurConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    /// Smart paste: detect, record, and return the routing decision.
    pub fn paste(&mut self, text: &str) -> Result<CmdResult> {
        commands::paste::run(&mut self.store, &self.config, text)
    }

    /// Detection without side effects: no history entry, no callbacks.
    pub fn analyze(&self, text: &str) -> Option<Detection> {
        Detector::new(self.config.detector_settings()).classify(text)
    }

    pub fn format_json(&self, text: &str, mode: commands::json::JsonMode) -> Result<CmdResult> {
        commands::json::run(text, mode)
    }

    pub fn decode_jwt(&self, token: &str, secret: Option<&str>) -> Result<CmdResult> {
        commands::jwt::run(token, secret)
    }

    pub fn convert_base64(
        &self,
        text: &str,
        direction: commands::base64::Direction,
        url_safe: bool,
    ) -> Result<CmdResult> {
        commands::base64::run(text, direction, url_safe)
    }

    /// Decode Base64 content the detector routed here, whatever alphabet
    /// it uses.
    pub fn decode_detected_base64(&self, text: &str) -> Result<CmdResult> {
        commands::base64::run_detected(text)
    }

    pub fn convert_timestamp(&self, value: &str) -> Result<CmdResult> {
        commands::timestamp::run(value)
    }

    pub fn test_regex(&self, pattern: &str, text: &str) -> Result<CmdResult> {
        commands::regex::run(pattern, text)
    }

    pub fn history(&self) -> Result<CmdResult> {
        commands::history::run(&self.store)
    }

    pub fn clear_history(&mut self) -> Result<CmdResult> {
        commands::history::clear(&mut self.store)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        // A set may have changed detector thresholds; reload.
        self.config = PasteurConfig::load(&self.config_dir)?;
        Ok(result)
    }
}
