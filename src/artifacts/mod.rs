//! Loading of the JSON artefacts written next to a proof.
//!
//! A proof is shipped as `proof.json`, a JSON array of base64 strings (one per
//! transcript), together with the `conf.json` layout consumed by
//! [`TranscriptConfig::from_json`](crate::config::TranscriptConfig::from_json).
//! Reading the files themselves is left to the caller.

use thiserror::Error;

use crate::utils::serialization::ProofBytes;

/// Failure while loading a `proof.json` document.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The document was not a JSON array of strings.
    #[error("invalid proof document: {0}")]
    Json(#[from] serde_json::Error),
    /// The document contained no transcript.
    #[error("proof document holds no transcripts")]
    Empty,
    /// An entry was not valid base64.
    #[error("transcript {index} is not valid base64: {reason}")]
    Base64 {
        /// Position of the entry in the array.
        index: usize,
        /// Decoder message.
        reason: String,
    },
    /// The requested transcript does not exist.
    #[error("transcript {index} requested but the document holds {available}")]
    MissingTranscript {
        /// Requested position.
        index: usize,
        /// Number of transcripts present.
        available: usize,
    },
}

/// Decodes every transcript held by a `proof.json` document.
pub fn load_proof_artifacts(json: &str) -> Result<Vec<ProofBytes>, ArtifactError> {
    let entries: Vec<String> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(ArtifactError::Empty);
    }
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            ProofBytes::from_base64(entry).map_err(|err| ArtifactError::Base64 {
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Decodes transcript `index` of a `proof.json` document.
pub fn load_proof_artifact(json: &str, index: usize) -> Result<ProofBytes, ArtifactError> {
    let mut transcripts = load_proof_artifacts(json)?;
    let available = transcripts.len();
    if index >= available {
        return Err(ArtifactError::MissingTranscript { index, available });
    }
    Ok(transcripts.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_every_entry() {
        let json = r#"["AAEC", "/w=="]"#;
        let transcripts = load_proof_artifacts(json).expect("load");
        assert_eq!(transcripts.len(), 2);
        assert_eq!(transcripts[0].as_slice(), &[0, 1, 2]);
        assert_eq!(transcripts[1].as_slice(), &[0xff]);
    }

    #[test]
    fn selects_by_index() {
        let json = r#"["AAEC", "/w=="]"#;
        assert_eq!(load_proof_artifact(json, 1).unwrap().as_slice(), &[0xff]);
        assert!(matches!(
            load_proof_artifact(json, 2).unwrap_err(),
            ArtifactError::MissingTranscript {
                index: 2,
                available: 2
            }
        ));
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(load_proof_artifacts("[]").unwrap_err(), ArtifactError::Empty));
        let err = load_proof_artifacts("{\"proof\": 1}").unwrap_err();
        assert!(matches!(err, ArtifactError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(matches!(
            load_proof_artifacts(r#"["AAEC", "%%%"]"#).unwrap_err(),
            ArtifactError::Base64 { index: 1, .. }
        ));
    }
}
