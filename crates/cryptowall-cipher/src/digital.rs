//! "Digital demo" cipher: standard base64 over UTF-8. An encoding, not a cipher.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CipherError;

/// Encode text as padded standard base64.
pub fn encode_digital(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 back to text, reporting why it failed.
pub fn try_decode_digital(encoded: &str) -> Result<String, CipherError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| CipherError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CipherError::Decode(e.to_string()))
}

/// Decode base64 back to text. Malformed input yields an empty string.
///
/// An empty result means "no answer", not a decoded empty message.
pub fn decode_digital(encoded: &str) -> String {
    match try_decode_digital(encoded) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "digital decode failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_utf8() {
        assert_eq!(encode_digital("Hello"), "SGVsbG8=");
        assert_eq!(encode_digital("привет"), "0L/RgNC40LLQtdGC");
        assert_eq!(encode_digital(""), "");
    }

    #[test]
    fn decodes_utf8() {
        assert_eq!(decode_digital("0L/RgNC40LLQtdGC"), "привет");
        assert_eq!(decode_digital("SGVsbG8="), "Hello");
    }

    #[test]
    fn malformed_input_is_soft() {
        assert_eq!(decode_digital("not-valid-base64!!"), "");
        assert_eq!(decode_digital("SGVsbG8"), "");
        assert!(matches!(
            try_decode_digital("not-valid-base64!!"),
            Err(CipherError::Decode(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_soft() {
        // 0xFF 0xFE
        assert_eq!(decode_digital("//4="), "");
    }
}
