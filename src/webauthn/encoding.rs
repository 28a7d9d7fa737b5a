//! Canonical binary-to-text encoding
//!
//! Every binary field on the wire (challenge, user handle, credential ids) is
//! unpadded base64url. Values stay raw bytes in memory and are only converted
//! at the serde boundary through [`base64url`].

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::errors::WebAuthnError;

/// Encode bytes as unpadded base64url
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded base64url text
///
/// # Errors
///
/// Returns `WebAuthnError::MalformedEncoding` if the text contains characters
/// outside the URL-safe alphabet (including `=` padding), has an impossible
/// length, or carries non-zero trailing bits.
pub fn decode(text: &str) -> Result<Vec<u8>, WebAuthnError> {
    URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|e| WebAuthnError::MalformedEncoding(e.to_string()))
}

/// Serde adapter for `Vec<u8>` fields carried as base64url strings
///
/// Use with `#[serde(with = "base64url")]`.
pub mod base64url {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::decode(&text).map_err(serde::de::Error::custom)
    }
}
