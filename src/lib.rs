//! Decoder for packed PLONK + FRI proof transcripts.
//!
//! A transcript is a flat byte buffer with no schema of its own. Element
//! widths and repetition counts come from a [`TranscriptConfig`], and the
//! decoder walks the buffer once, front to back, producing an owned
//! [`Proof`]. Decoding is all-or-nothing: the first underflow, length-prefix
//! mismatch or unread trailing byte fails the call.
//!
//! ```text
//! conf.json  ─► TranscriptConfig ─┐
//!                                 ├─► deserialize_proof ─► Proof ─► CircuitInputs
//! proof.json ─► ProofBytes ───────┘
//! ```
//!
//! The crate never hashes, verifies or interprets field elements; numeric
//! rendering for the verifier circuit lives in [`circuit`].

pub mod artifacts;
pub mod circuit;
pub mod config;
pub mod field;
pub mod fri;
pub mod merkle;
pub mod proof;
pub mod ser;
pub mod utils;

use thiserror::Error;

pub use artifacts::{load_proof_artifact, load_proof_artifacts, ArtifactError};
pub use circuit::{CircuitError, CircuitInputs};
pub use config::{ConfigError, TranscriptConfig, TranscriptConfigBuilder};
pub use proof::{deserialize_proof, serialize_proof, Proof};
pub use ser::{DecodeError, DecodeResult, EncodeError, FormatMismatch, Section};
pub use utils::serialization::ProofBytes;

/// Failure of [`deserialize_base64_proof`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// The text was not valid standard base64.
    #[error("transcript is not valid base64: {0}")]
    Base64(String),
    /// The decoded bytes did not match the configuration.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Decodes a base64-encoded transcript.
///
/// Surrounding whitespace is ignored. Equivalent to decoding the base64 text
/// and passing the bytes to [`deserialize_proof`].
pub fn deserialize_base64_proof(
    encoded: &str,
    config: &TranscriptConfig,
) -> Result<Proof, TranscriptError> {
    let bytes =
        ProofBytes::from_base64(encoded).map_err(|err| TranscriptError::Base64(err.to_string()))?;
    Ok(deserialize_proof(bytes.as_slice(), config)?)
}
