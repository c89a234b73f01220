use crate::commands::CmdResult;
use crate::error::{PasteurError, Result};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Map the URL-safe alphabet onto the standard one so either (or a mix of
/// both) decodes the same way. This is the mapping the detector classifies
/// with, so anything it routes here must decode under it too.
pub(crate) fn normalize_alphabet(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect()
}

/// Decode standard-alphabet Base64, tolerating missing or present padding.
pub(crate) fn decode_forgiving(input: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    STANDARD_NO_PAD.decode(input.trim_end_matches('='))
}

/// Decode base64url, tolerating missing or present padding. JWTs and other
/// URL-safe payloads usually omit the `=` padding.
pub(crate) fn decode_url_forgiving(
    input: &str,
) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))
}

/// Encode or decode Base64 text. Decoding requires the result to be valid
/// UTF-8; this tool converts text, it does not extract binaries.
pub fn run(input: &str, direction: Direction, url_safe: bool) -> Result<CmdResult> {
    let output = match direction {
        Direction::Encode => {
            if url_safe {
                URL_SAFE_NO_PAD.encode(input.as_bytes())
            } else {
                STANDARD.encode(input.as_bytes())
            }
        }
        Direction::Decode => {
            let input = input.trim();
            let bytes = if url_safe {
                decode_url_forgiving(input)?
            } else {
                decode_forgiving(input)?
            };
            String::from_utf8(bytes)
                .map_err(|_| PasteurError::Api("Decoded data is not valid UTF-8 text".into()))?
        }
    };
    Ok(CmdResult::default().with_output(output))
}

/// Decode detector-routed content. The detector accepts standard and
/// URL-safe alphabets alike (even mixed), so this normalizes first instead
/// of guessing which alphabet the content uses.
pub fn run_detected(input: &str) -> Result<CmdResult> {
    let normalized = normalize_alphabet(input.trim());
    let bytes = decode_forgiving(&normalized)?;
    let output = String::from_utf8(bytes)
        .map_err(|_| PasteurError::Api("Decoded data is not valid UTF-8 text".into()))?;
    Ok(CmdResult::default().with_output(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_standard_with_padding() {
        let result = run("Hello, World!", Direction::Encode, false).unwrap();
        assert_eq!(result.output.as_deref(), Some("SGVsbG8sIFdvcmxkIQ=="));
    }

    #[test]
    fn decodes_with_and_without_padding() {
        for input in ["SGVsbG8sIFdvcmxkIQ==", "SGVsbG8sIFdvcmxkIQ"] {
            let result = run(input, Direction::Decode, false).unwrap();
            assert_eq!(result.output.as_deref(), Some("Hello, World!"));
        }
    }

    #[test]
    fn url_safe_roundtrip() {
        let original = "subjects?_d=1&x=~";
        let encoded = run(original, Direction::Encode, true).unwrap().output.unwrap();
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('='));
        let decoded = run(&encoded, Direction::Decode, true).unwrap();
        assert_eq!(decoded.output.as_deref(), Some(original));
    }

    #[test]
    fn detected_decode_accepts_mixed_alphabets() {
        // "YWI+" is standard-only, "YWI_" is URL-safe-only; together they
        // decode once the URL-safe characters are normalized.
        let result = run_detected("YWI+YWI_").unwrap();
        assert_eq!(result.output.as_deref(), Some("ab>ab?"));
    }

    #[test]
    fn invalid_alphabet_is_an_error() {
        assert!(run("not base64!!", Direction::Decode, false).is_err());
    }

    #[test]
    fn non_utf8_decode_is_an_error() {
        // 0xFF 0xFE is not valid UTF-8
        let encoded = STANDARD.encode([0xFFu8, 0xFE]);
        assert!(run(&encoded, Direction::Decode, false).is_err());
    }
}
