use thiserror::Error;

use super::TranscriptConfig;
use crate::fri::LeafGroup;

/// Largest proof depth the one-byte length prefix can carry.
pub const MAX_PREFIXED_DEPTH: usize = u8::MAX as usize;

/// Error enumeration for configuration validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An element width was zero.
    #[error("{element} size must be non-zero")]
    ZeroElementSize {
        /// Name of the offending width.
        element: &'static str,
    },
    /// Only single-byte Merkle proof length prefixes are defined.
    #[error("length prefix width {width} is unsupported, expected 1")]
    UnsupportedPrefixWidth {
        /// Configured prefix width.
        width: usize,
    },
    /// A query-round proof depth cannot be represented by the length prefix.
    #[error("{group} proof depth {depth} exceeds the single-byte length prefix")]
    ProofDepthExceedsPrefix {
        /// Leaf group carrying the depth.
        group: LeafGroup,
        /// Configured depth.
        depth: usize,
    },
    /// Commit rounds were configured with caps holding no digest.
    #[error("{rounds} commit rounds configured with a zero cap height")]
    EmptyCommitCaps {
        /// Configured commit round count.
        rounds: usize,
    },
    /// The transcript size does not fit in `usize`.
    #[error("transcript layout overflows the addressable size")]
    LayoutOverflow,
    /// The configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validates the configuration invariants and returns the exact transcript length.
pub(super) fn validate(config: &TranscriptConfig) -> Result<usize, ConfigError> {
    validate_sizes(config)?;
    validate_depths(config)?;
    validate_commit_caps(config)?;
    transcript_size(config)
}

fn validate_sizes(config: &TranscriptConfig) -> Result<(), ConfigError> {
    let sizes = config.sizes();
    for (element, width) in [
        ("field element", sizes.field),
        ("extension field element", sizes.ext_field),
        ("hash digest", sizes.hash),
    ] {
        if width == 0 {
            return Err(ConfigError::ZeroElementSize { element });
        }
    }
    if sizes.length_prefix != 1 {
        return Err(ConfigError::UnsupportedPrefixWidth {
            width: sizes.length_prefix,
        });
    }
    Ok(())
}

fn validate_depths(config: &TranscriptConfig) -> Result<(), ConfigError> {
    for group in LeafGroup::ALL {
        let depth = config.fri().leaf(group).proof_depth;
        if depth > MAX_PREFIXED_DEPTH {
            return Err(ConfigError::ProofDepthExceedsPrefix { group, depth });
        }
    }
    Ok(())
}

// Every repeated region must occupy at least one byte per repetition, so a
// count is always bounded by the transcript length.
fn validate_commit_caps(config: &TranscriptConfig) -> Result<(), ConfigError> {
    let fri = config.fri();
    if fri.num_commit_rounds > 0 && fri.commit_cap_height == 0 {
        return Err(ConfigError::EmptyCommitCaps {
            rounds: fri.num_commit_rounds,
        });
    }
    Ok(())
}

fn mul(lhs: usize, rhs: usize) -> Result<usize, ConfigError> {
    lhs.checked_mul(rhs).ok_or(ConfigError::LayoutOverflow)
}

fn sum(parts: &[usize]) -> Result<usize, ConfigError> {
    parts.iter().try_fold(0usize, |acc, part| {
        acc.checked_add(*part).ok_or(ConfigError::LayoutOverflow)
    })
}

/// Byte length of one FRI query round.
pub(super) fn query_round_size(config: &TranscriptConfig) -> Result<usize, ConfigError> {
    let sizes = config.sizes();
    let mut parts = Vec::with_capacity(LeafGroup::ALL.len() * 3);
    for group in LeafGroup::ALL {
        let shape = config.fri().leaf(group);
        parts.push(mul(shape.values, sizes.value_width(group))?);
        parts.push(sizes.length_prefix);
        parts.push(mul(shape.proof_depth, sizes.hash)?);
    }
    sum(&parts)
}

fn transcript_size(config: &TranscriptConfig) -> Result<usize, ConfigError> {
    let sizes = config.sizes();
    let caps = config.caps();
    let openings = config.openings();
    let fri = config.fri();

    let cap_digests = sum(&[caps.wires, caps.plonk_zs_partial_products, caps.quotient_polys])?;
    let opening_elements = sum(&openings.as_array())?;
    let commit_digests = mul(fri.num_commit_rounds, fri.commit_cap_height)?;

    sum(&[
        mul(cap_digests, sizes.hash)?,
        mul(opening_elements, sizes.ext_field)?,
        mul(commit_digests, sizes.hash)?,
        mul(fri.num_query_rounds, query_round_size(config)?)?,
        mul(fri.final_poly_len, sizes.ext_field)?,
        sizes.field,
        mul(config.num_public_inputs(), sizes.field)?,
    ])
}
