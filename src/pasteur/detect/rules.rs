//! The format rule table.
//!
//! Each rule pairs a cheap structural shape check with an authoritative
//! semantic validator, plus a fixed confidence weight. Rules are ordered
//! most-specific first; the order doubles as the tie-break when two rules
//! validate at the same confidence.

use crate::commands::base64 as b64;
use crate::commands::regex as regex_cmd;
use crate::model::Format;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tunable thresholds for the heuristics that cannot be exact.
///
/// The Base64 numbers are inherited policy, not derived values: short
/// decodes are accepted as-is, longer ones must decode to mostly printable
/// ASCII. Changing either is a behavior change, not a fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorSettings {
    /// Minimum fraction of printable ASCII bytes in a long Base64 decode.
    pub base64_printable_ratio: f64,
    /// Decodes shorter than this skip the printable-ratio check.
    pub base64_short_decode_len: usize,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            base64_printable_ratio: 0.7,
            base64_short_decode_len: 50,
        }
    }
}

pub(crate) struct FormatRule {
    pub format: Format,
    pub confidence: f64,
    pub structural: fn(&str) -> bool,
    pub semantic: fn(&str, &DetectorSettings) -> bool,
}

/// The rule set, evaluated in order. JWT outranks everything because three
/// base64url groups joined by dots is the most distinctive signature;
/// Base64 sits last and lowest because almost any printable token can pass
/// its structural test.
pub(crate) static RULES: [FormatRule; 5] = [
    FormatRule {
        format: Format::Jwt,
        confidence: 0.95,
        structural: jwt_structural,
        semantic: jwt_semantic,
    },
    FormatRule {
        format: Format::Json,
        confidence: 0.9,
        structural: json_structural,
        semantic: json_semantic,
    },
    FormatRule {
        format: Format::UnixTimestamp,
        confidence: 0.85,
        structural: timestamp_structural,
        semantic: timestamp_semantic,
    },
    FormatRule {
        format: Format::Regex,
        confidence: 0.9,
        structural: regex_structural,
        semantic: regex_semantic,
    },
    FormatRule {
        format: Format::Base64,
        confidence: 0.7,
        structural: base64_structural,
        semantic: base64_semantic,
    },
];

// --- jwt ---

static JWT_SHAPE: Lazy<Regex> = Lazy::new(|| {
    // Three dot-separated base64url groups; the signature group may be
    // empty (unsecured tokens end in a bare dot).
    Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*$").unwrap()
});

fn jwt_structural(text: &str) -> bool {
    JWT_SHAPE.is_match(text)
}

fn jwt_semantic(text: &str, _settings: &DetectorSettings) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 3 {
        return false;
    }
    let header = match decode_base64url_object(parts[0]) {
        Some(v) => v,
        None => return false,
    };
    let payload = match decode_base64url_object(parts[1]) {
        Some(v) => v,
        None => return false,
    };

    header.get("typ").and_then(|v| v.as_str()) == Some("JWT")
        || header.contains_key("alg")
        || ["iat", "exp", "sub"].iter().any(|k| payload.contains_key(*k))
}

fn decode_base64url_object(part: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
    let bytes = b64::decode_url_forgiving(part).ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}

// --- json ---

fn json_structural(text: &str) -> bool {
    // The classifier trims before dispatching, so a plain prefix check is
    // enough here.
    text.starts_with('{') || text.starts_with('[')
}

fn json_semantic(text: &str, _settings: &DetectorSettings) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

// --- regex literal ---

fn regex_structural(text: &str) -> bool {
    regex_cmd::split_literal(text).is_some()
}

fn regex_semantic(text: &str, _settings: &DetectorSettings) -> bool {
    match regex_cmd::split_literal(text) {
        Some((pattern, flags)) => regex_cmd::compile_with_flags(pattern, flags).is_ok(),
        None => false,
    }
}

// --- unix timestamp ---

/// Roughly 50 years in seconds. Epochs further out than now + this horizon
/// are treated as implausible rather than as timestamps.
const PLAUSIBLE_HORIZON_SECS: i64 = 1_577_880_000;

fn timestamp_structural(text: &str) -> bool {
    (text.len() == 10 || text.len() == 13) && text.bytes().all(|b| b.is_ascii_digit())
}

fn timestamp_semantic(text: &str, _settings: &DetectorSettings) -> bool {
    let value: i64 = match text.parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let now = Utc::now();
    if text.len() == 10 {
        value > 0 && value < now.timestamp() + PLAUSIBLE_HORIZON_SECS
    } else {
        value > 0 && value < now.timestamp_millis() + PLAUSIBLE_HORIZON_SECS * 1000
    }
}

// --- base64 ---

const BASE64_MIN_LEN: usize = 20;

fn base64_structural(text: &str) -> bool {
    // Anything with a dot defers to the JWT rule. The length floor keeps
    // short ordinary words from ever reaching the decoder.
    text.len() >= BASE64_MIN_LEN
        && !text.contains('.')
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=' | b'_' | b'-'))
}

fn base64_semantic(text: &str, settings: &DetectorSettings) -> bool {
    let normalized = b64::normalize_alphabet(text);
    let decoded = match b64::decode_forgiving(&normalized) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    if decoded.is_empty() {
        return false;
    }
    if decoded.len() < settings.base64_short_decode_len {
        return true;
    }
    let printable = decoded.iter().filter(|b| (32u8..126).contains(*b)).count();
    printable as f64 / decoded.len() as f64 > settings.base64_printable_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> DetectorSettings {
        DetectorSettings::default()
    }

    #[test]
    fn jwt_structural_requires_three_groups() {
        assert!(jwt_structural("aaa.bbb.ccc"));
        assert!(jwt_structural("aaa.bbb."));
        assert!(!jwt_structural("aaa.bbb"));
        assert!(!jwt_structural("aaa.bbb.ccc.ddd"));
        assert!(!jwt_structural("aaa.b b.ccc"));
    }

    #[test]
    fn jwt_semantic_accepts_alg_only_header() {
        // {"alg":"none"} . {"foo":1} . (empty)
        let token = "eyJhbGciOiJub25lIn0.eyJmb28iOjF9.";
        assert!(jwt_structural(token));
        assert!(jwt_semantic(token, &settings()));
    }

    #[test]
    fn jwt_semantic_rejects_non_object_segments() {
        // "hi" . "there" are valid JSON strings but not objects
        let token = "ImhpIg.InRoZXJlIg.sig";
        assert!(!jwt_semantic(token, &settings()));
    }

    #[test]
    fn timestamp_structural_is_strict_about_length() {
        assert!(timestamp_structural("1700000000"));
        assert!(timestamp_structural("1700000000000"));
        assert!(!timestamp_structural("170000000")); // 9 digits
        assert!(!timestamp_structural("17000000000")); // 11 digits
        assert!(!timestamp_structural("17000000o0"));
    }

    #[test]
    fn timestamp_semantic_rejects_far_future() {
        // 10 digits maxes out at 9999999999 (~year 2286), well past 50 years
        assert!(!timestamp_semantic("9999999999", &settings()));
        assert!(timestamp_semantic("1700000000", &settings()));
    }

    #[test]
    fn regex_structural_rejects_unknown_flags() {
        assert!(regex_structural("/abc/i"));
        assert!(regex_structural("/abc/"));
        assert!(!regex_structural("/abc/x"));
        assert!(!regex_structural("abc"));
    }

    #[test]
    fn base64_structural_defers_dotted_input_to_jwt() {
        assert!(!base64_structural("aaaa.bbbbbbbbbbbbbbbbbbbb"));
        assert!(base64_structural("SGVsbG8sIFdvcmxkIQ=="));
        assert!(!base64_structural("SGVsbG8=")); // below the length floor
    }

    #[test]
    fn base64_semantic_accepts_short_printable_decode() {
        assert!(base64_semantic("SGVsbG8sIFdvcmxkIQ==", &settings()));
    }

    #[test]
    fn base64_semantic_rejects_long_binary_decode() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let noise: Vec<u8> = (0u8..=255).cycle().take(200).collect();
        let encoded = STANDARD.encode(&noise);
        assert!(base64_structural(&encoded));
        assert!(!base64_semantic(&encoded, &settings()));
    }

    #[test]
    fn base64_semantic_ratio_is_configurable() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        // 60 printable bytes out of 100: passes at a 0.5 ratio, fails at 0.7
        let mut bytes = vec![b'a'; 60];
        bytes.extend(std::iter::repeat(0u8).take(40));
        let encoded = STANDARD.encode(&bytes);

        assert!(!base64_semantic(&encoded, &settings()));
        let relaxed = DetectorSettings {
            base64_printable_ratio: 0.5,
            ..settings()
        };
        assert!(base64_semantic(&encoded, &relaxed));
    }
}
