//! Serialization helpers shared by the boundary collaborators.
//! Transcripts usually travel as base64 text; opaque elements are rendered as hex in JSON.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

/// Wrapper around transcript bytes ensuring explicit conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofBytes {
    /// Raw transcript representation.
    bytes: Vec<u8>,
}

impl ProofBytes {
    /// Creates a new transcript byte container.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decodes a standard base64 string, ignoring surrounding whitespace.
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        let bytes = BASE64_STANDARD.decode(encoded.trim().as_bytes())?;
        Ok(Self { bytes })
    }

    /// Encodes the bytes as standard base64.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.bytes)
    }

    /// Returns the underlying byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the wrapper and returns the bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when no bytes are held.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for ProofBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<Vec<u8>> for ProofBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Serde adapter rendering byte vectors as lowercase hex strings.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        let value = encoded.trim();
        let value = value.strip_prefix("0x").unwrap_or(value);
        hex::decode(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_roundtrip_trims_whitespace() {
        let bytes = ProofBytes::new(vec![0, 1, 2, 0xfe, 0xff]);
        let encoded = format!("  {}\n", bytes.to_base64());
        let decoded = ProofBytes::from_base64(&encoded).expect("decode");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(ProofBytes::from_base64("not*base64").is_err());
    }
}
