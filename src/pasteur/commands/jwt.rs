use crate::commands::base64::decode_url_forgiving;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PasteurError, Result};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Decode a JWT's header and payload, and optionally verify its HMAC
/// signature against a shared secret (HS256/HS384/HS512 only).
pub fn run(token: &str, secret: Option<&str>) -> Result<CmdResult> {
    let token = token.trim();
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(PasteurError::Api(
            "A JWT has exactly three dot-separated segments".into(),
        ));
    }

    let header: serde_json::Value = serde_json::from_slice(&decode_url_forgiving(parts[0])?)?;
    let payload: serde_json::Value = serde_json::from_slice(&decode_url_forgiving(parts[1])?)?;

    let output = format!(
        "Header:\n{}\n\nPayload:\n{}",
        serde_json::to_string_pretty(&header)?,
        serde_json::to_string_pretty(&payload)?
    );

    let mut result = CmdResult::default().with_output(output);

    if let Some(message) = expiry_message(&payload) {
        result.add_message(message);
    }

    if let Some(secret) = secret {
        let alg = header
            .get("alg")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        match verify_signature(&alg, secret, parts[0], parts[1], parts[2]) {
            Ok(true) => result.add_message(CmdMessage::success(format!(
                "Signature verified ({alg})"
            ))),
            Ok(false) => result.add_message(CmdMessage::error("Signature does not match")),
            Err(err) => result.add_message(CmdMessage::warning(err.to_string())),
        }
    }

    Ok(result)
}

fn expiry_message(payload: &serde_json::Value) -> Option<CmdMessage> {
    let exp = payload.get("exp")?.as_i64()?;
    let expires_at = DateTime::<Utc>::from_timestamp(exp, 0)?;
    if expires_at < Utc::now() {
        Some(CmdMessage::warning(format!(
            "Token expired at {}",
            expires_at.to_rfc3339()
        )))
    } else {
        Some(CmdMessage::info(format!(
            "Token expires at {}",
            expires_at.to_rfc3339()
        )))
    }
}

fn verify_signature(
    alg: &str,
    secret: &str,
    header_b64: &str,
    payload_b64: &str,
    signature_b64: &str,
) -> Result<bool> {
    let signing_input = format!("{header_b64}.{payload_b64}");
    let signature = decode_url_forgiving(signature_b64)?;

    let computed = match alg {
        "HS256" => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
                .map_err(|e| PasteurError::Api(e.to_string()))?;
            mac.update(signing_input.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        "HS384" => {
            let mut mac = Hmac::<Sha384>::new_from_slice(secret.as_bytes())
                .map_err(|e| PasteurError::Api(e.to_string()))?;
            mac.update(signing_input.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        "HS512" => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes())
                .map_err(|e| PasteurError::Api(e.to_string()))?;
            mac.update(signing_input.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        other => {
            return Err(PasteurError::Api(format!(
                "Cannot verify \"{other}\" signatures; only HS256/HS384/HS512 are supported"
            )))
        }
    };

    Ok(computed == signature)
}
