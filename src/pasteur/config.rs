use crate::detect::rules::DetectorSettings;
use crate::error::{PasteurError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_PRINTABLE_RATIO: f64 = 0.7;
const DEFAULT_SHORT_DECODE_LEN: usize = 50;
const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Configuration for pasteur, stored in config.json next to the prefs.
///
/// The Base64 thresholds are the detector's inherited tuning knobs;
/// changing them is a policy decision, which is why they live in config
/// rather than code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasteurConfig {
    /// Minimum printable-ASCII fraction for long Base64 decodes.
    #[serde(default = "default_printable_ratio")]
    pub base64_printable_ratio: f64,

    /// Decoded lengths below this skip the printable check.
    #[serde(default = "default_short_decode_len")]
    pub base64_short_decode_len: usize,

    /// Maximum number of smart-paste detections kept in history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_printable_ratio() -> f64 {
    DEFAULT_PRINTABLE_RATIO
}

fn default_short_decode_len() -> usize {
    DEFAULT_SHORT_DECODE_LEN
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for PasteurConfig {
    fn default() -> Self {
        Self {
            base64_printable_ratio: DEFAULT_PRINTABLE_RATIO,
            base64_short_decode_len: DEFAULT_SHORT_DECODE_LEN,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PasteurConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PasteurError::Io)?;
        let config: PasteurConfig = serde_json::from_str(&content).map_err(PasteurError::Json)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PasteurError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PasteurError::Json)?;
        fs::write(config_path, content).map_err(PasteurError::Io)?;
        Ok(())
    }

    /// The keys addressable through `pasteur config`.
    pub const KEYS: [&'static str; 3] = [
        "base64-printable-ratio",
        "base64-short-decode-len",
        "history-limit",
    ];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base64-printable-ratio" => Some(self.base64_printable_ratio.to_string()),
            "base64-short-decode-len" => Some(self.base64_short_decode_len.to_string()),
            "history-limit" => Some(self.history_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base64-printable-ratio" => {
                let ratio: f64 = value
                    .parse()
                    .map_err(|_| PasteurError::Api(format!("Not a number: {value}")))?;
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(PasteurError::Api(
                        "base64-printable-ratio must be between 0 and 1".to_string(),
                    ));
                }
                self.base64_printable_ratio = ratio;
            }
            "base64-short-decode-len" => {
                self.base64_short_decode_len = value
                    .parse()
                    .map_err(|_| PasteurError::Api(format!("Not a whole number: {value}")))?;
            }
            "history-limit" => {
                self.history_limit = value
                    .parse()
                    .map_err(|_| PasteurError::Api(format!("Not a whole number: {value}")))?;
            }
            other => {
                return Err(PasteurError::Api(format!("Unknown config key: {other}")));
            }
        }
        Ok(())
    }

    pub fn detector_settings(&self) -> DetectorSettings {
        DetectorSettings {
            base64_printable_ratio: self.base64_printable_ratio,
            base64_short_decode_len: self.base64_short_decode_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PasteurConfig::default();
        assert_eq!(config.base64_printable_ratio, 0.7);
        assert_eq!(config.base64_short_decode_len, 50);
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PasteurConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, PasteurConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = PasteurConfig::default();
        config.set("history-limit", "10").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = PasteurConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.history_limit, 10);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PasteurConfig::default();
        assert!(config.set("base64-printable-ratio", "1.5").is_err());
        assert!(config.set("base64-printable-ratio", "abc").is_err());
        assert!(config.set("no-such-key", "1").is_err());
    }

    #[test]
    fn test_every_listed_key_is_gettable() {
        let config = PasteurConfig::default();
        for key in PasteurConfig::KEYS {
            assert!(config.get(key).is_some(), "missing getter for {key}");
        }
        assert!(config.get("no-such-key").is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = PasteurConfig {
            base64_printable_ratio: 0.5,
            base64_short_decode_len: 25,
            history_limit: 5,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PasteurConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
