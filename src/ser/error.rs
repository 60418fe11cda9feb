use core::fmt;
use thiserror::Error;

use crate::fri::{LeafGroup, LeafPart};
use crate::proof::OpeningCategory;

/// Transcript region a read belongs to, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Merkle cap over the wire polynomials.
    WiresCap,
    /// Merkle cap over the permutation and partial-product polynomials.
    PlonkZsPartialProductsCap,
    /// Merkle cap over the quotient polynomial chunks.
    QuotientPolysCap,
    /// One of the seven opening sequences.
    Openings(OpeningCategory),
    /// Merkle cap committed in the given FRI commit round.
    FriCommitPhaseCaps {
        /// Commit round index.
        round: usize,
    },
    /// Part of a leaf group inside a FRI query round.
    FriQuery {
        /// Query round index.
        round: usize,
        /// Leaf group being decoded.
        group: LeafGroup,
        /// Which part of the group was being read.
        part: LeafPart,
    },
    /// Coefficients of the final FRI polynomial.
    FriFinalPoly,
    /// Proof-of-work witness.
    FriPowWitness,
    /// Public inputs trailing the proof.
    PublicInputs,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::WiresCap => write!(f, "wires_cap"),
            Section::PlonkZsPartialProductsCap => write!(f, "plonk_zs_partial_products_cap"),
            Section::QuotientPolysCap => write!(f, "quotient_polys_cap"),
            Section::Openings(category) => write!(f, "openings.{category}"),
            Section::FriCommitPhaseCaps { round } => {
                write!(f, "fri_commit_phase_merkle_caps[{round}]")
            }
            Section::FriQuery { round, group, part } => {
                write!(f, "fri_query_round[{round}].{group}.{part}")
            }
            Section::FriFinalPoly => write!(f, "fri_final_poly_ext_v"),
            Section::FriPowWitness => write!(f, "fri_pow_witness"),
            Section::PublicInputs => write!(f, "public_inputs"),
        }
    }
}

/// Structural disagreement between the buffer and the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatMismatch {
    /// A query-round Merkle proof length prefix disagreed with the configured depth.
    #[error("query round {round} {group} proof length prefix is {actual}, expected {expected}")]
    LengthPrefix {
        /// Query round index.
        round: usize,
        /// Leaf group whose prefix was checked.
        group: LeafGroup,
        /// Depth declared by the configuration.
        expected: usize,
        /// Byte found in the buffer.
        actual: u8,
    },
    /// Bytes remained after the last section.
    #[error("{remaining} trailing bytes after {consumed} decoded bytes")]
    TrailingBytes {
        /// Offset reached after the public inputs.
        consumed: usize,
        /// Number of unread bytes.
        remaining: usize,
    },
}

/// Failure surfaced while decoding a transcript. Always fatal to the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The cursor was asked for more bytes than remain.
    #[error("{section}: needed {requested} bytes at offset {offset}, {remaining} remaining")]
    OutOfBounds {
        /// Region being decoded.
        section: Section,
        /// Cursor offset at the failing read.
        offset: usize,
        /// Bytes requested by the read.
        requested: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// The buffer disagreed with the configuration.
    #[error("format mismatch: {0}")]
    FormatMismatch(#[from] FormatMismatch),
}

impl DecodeError {
    /// Creates an out-of-bounds error helper.
    pub fn out_of_bounds(
        section: Section,
        offset: usize,
        requested: usize,
        remaining: usize,
    ) -> Self {
        DecodeError::OutOfBounds {
            section,
            offset,
            requested,
            remaining,
        }
    }

    /// Returns the section for out-of-bounds failures.
    pub fn section(&self) -> Option<Section> {
        match self {
            DecodeError::OutOfBounds { section, .. } => Some(*section),
            DecodeError::FormatMismatch(_) => None,
        }
    }

    /// Returns `true` for underflow failures.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, DecodeError::OutOfBounds { .. })
    }

    /// Returns `true` for length-prefix and trailing-data failures.
    pub fn is_format_mismatch(&self) -> bool {
        matches!(self, DecodeError::FormatMismatch(_))
    }
}

/// Convenient alias for decoding results.
pub type DecodeResult<T> = core::result::Result<T, DecodeError>;

/// Failure surfaced while encoding a [`Proof`](crate::proof::Proof).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A sequence length disagreed with the configured count.
    #[error("{section}: expected {expected} elements, found {actual}")]
    ShapeMismatch {
        /// Region being encoded.
        section: Section,
        /// Count declared by the configuration.
        expected: usize,
        /// Count found in the proof.
        actual: usize,
    },
    /// A FRI phase held a different number of rounds than configured.
    #[error("{phase}: expected {expected} rounds, found {actual}")]
    RoundCount {
        /// Name of the repeated region.
        phase: &'static str,
        /// Round count declared by the configuration.
        expected: usize,
        /// Round count found in the proof.
        actual: usize,
    },
    /// An element carried the wrong number of bytes.
    #[error("{section}: expected {expected}-byte elements, found {actual} bytes")]
    ElementWidth {
        /// Region being encoded.
        section: Section,
        /// Width declared by the configuration.
        expected: usize,
        /// Width of the offending element.
        actual: usize,
    },
    /// A Merkle proof depth cannot be written as a one-byte prefix.
    #[error("{section}: proof depth {depth} does not fit the length prefix")]
    PrefixOverflow {
        /// Region being encoded.
        section: Section,
        /// Offending depth.
        depth: usize,
    },
}

/// Convenient alias for encoding results.
pub type EncodeResult<T> = core::result::Result<T, EncodeError>;
