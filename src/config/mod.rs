//! Transcript layout configuration.
//!
//! A transcript carries no schema of its own: every element width and
//! repetition count is supplied out of band, usually through the `conf.json`
//! side file produced alongside the proof. This module turns that record into
//! a validated, immutable [`TranscriptConfig`].
//!
//! # Invariants
//!
//! * Element widths are non-zero and the Merkle proof length prefix is exactly
//!   one byte wide.
//! * Every query-round proof depth fits the one-byte prefix (`<= 255`).
//! * Commit rounds carry non-empty caps, so every repeated region takes at
//!   least one byte per repetition.
//! * The total transcript length, [`TranscriptConfig::proof_size`], is
//!   representable, so no section size computed from a validated
//!   configuration can overflow.
//!
//! Construction goes through [`TranscriptConfigBuilder::build`]; there is no
//! way to obtain an unvalidated [`TranscriptConfig`].

mod builder;
mod layout;
mod validate;

use serde::{Deserialize, Serialize};

use crate::fri::LeafGroup;
use crate::proof::OpeningCategory;

pub use builder::TranscriptConfigBuilder;
pub use layout::SectionSpan;
pub use validate::{ConfigError, MAX_PREFIXED_DEPTH};

/// Byte widths of the opaque elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSizes {
    /// Base-field element width.
    pub field: usize,
    /// Extension-field element width.
    pub ext_field: usize,
    /// Digest width.
    pub hash: usize,
    /// Merkle proof length prefix width.
    pub length_prefix: usize,
}

impl ElementSizes {
    /// Width of the values stored in a query-round leaf group.
    pub fn value_width(&self, group: LeafGroup) -> usize {
        if group.is_extension() {
            self.ext_field
        } else {
            self.field
        }
    }
}

/// Digest counts of the three trace commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapCounts {
    pub wires: usize,
    pub plonk_zs_partial_products: usize,
    pub quotient_polys: usize,
}

/// Element counts of the opening sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningCounts {
    pub constants: usize,
    pub plonk_sigmas: usize,
    pub wires: usize,
    pub plonk_zs: usize,
    pub plonk_zs_next: usize,
    pub partial_products: usize,
    pub quotient_polys: usize,
}

impl OpeningCounts {
    /// Count configured for `category`.
    pub fn get(&self, category: OpeningCategory) -> usize {
        match category {
            OpeningCategory::Constants => self.constants,
            OpeningCategory::PlonkSigmas => self.plonk_sigmas,
            OpeningCategory::Wires => self.wires,
            OpeningCategory::PlonkZs => self.plonk_zs,
            OpeningCategory::PlonkZsNext => self.plonk_zs_next,
            OpeningCategory::PartialProducts => self.partial_products,
            OpeningCategory::QuotientPolys => self.quotient_polys,
        }
    }

    /// Counts in wire order.
    pub fn as_array(&self) -> [usize; 7] {
        OpeningCategory::ALL.map(|category| self.get(category))
    }
}

/// Value count and Merkle proof depth of one query-round leaf group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafShape {
    pub values: usize,
    pub proof_depth: usize,
}

impl LeafShape {
    /// Shape with `values` opened elements and a `proof_depth`-sibling path.
    pub const fn new(values: usize, proof_depth: usize) -> Self {
        Self {
            values,
            proof_depth,
        }
    }
}

/// Shape of the FRI opening proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriShape {
    /// Number of commit-phase Merkle caps.
    pub num_commit_rounds: usize,
    /// Digests per commit-phase cap.
    pub commit_cap_height: usize,
    /// Number of query rounds.
    pub num_query_rounds: usize,
    pub constants_sigmas: LeafShape,
    pub wires: LeafShape,
    pub zs_partial: LeafShape,
    pub quotient: LeafShape,
    pub step0: LeafShape,
    pub step1: LeafShape,
    /// Coefficients of the final polynomial.
    pub final_poly_len: usize,
}

impl FriShape {
    /// Shape configured for `group`.
    pub fn leaf(&self, group: LeafGroup) -> LeafShape {
        match group {
            LeafGroup::ConstantsSigmas => self.constants_sigmas,
            LeafGroup::Wires => self.wires,
            LeafGroup::ZsPartial => self.zs_partial,
            LeafGroup::Quotient => self.quotient,
            LeafGroup::Step0 => self.step0,
            LeafGroup::Step1 => self.step1,
        }
    }
}

/// Validated transcript layout. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TranscriptConfigBuilder", try_from = "TranscriptConfigBuilder")]
pub struct TranscriptConfig {
    sizes: ElementSizes,
    caps: CapCounts,
    openings: OpeningCounts,
    fri: FriShape,
    num_public_inputs: usize,
    proof_size: usize,
}

impl TranscriptConfig {
    /// Parses and validates a `conf.json` document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let builder: TranscriptConfigBuilder = serde_json::from_str(json)?;
        builder.build()
    }

    /// Renders the configuration in the flat `conf.json` shape.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&TranscriptConfigBuilder::from(
            self.clone(),
        ))?)
    }

    pub fn sizes(&self) -> &ElementSizes {
        &self.sizes
    }

    pub fn caps(&self) -> &CapCounts {
        &self.caps
    }

    pub fn openings(&self) -> &OpeningCounts {
        &self.openings
    }

    pub fn fri(&self) -> &FriShape {
        &self.fri
    }

    pub fn num_public_inputs(&self) -> usize {
        self.num_public_inputs
    }

    /// Exact byte length of every transcript matching this configuration.
    pub fn proof_size(&self) -> usize {
        self.proof_size
    }

    /// Byte length of a single FRI query round.
    pub fn query_round_size(&self) -> usize {
        // Validation already proved the full layout fits, so this cannot overflow.
        validate::query_round_size(self).unwrap_or(usize::MAX)
    }

    /// Every section in wire order with its offset and length.
    ///
    /// One span is produced per section, so the result grows with the
    /// configured round counts.
    pub fn layout(&self) -> Vec<SectionSpan> {
        layout::section_spans(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plonky2_like() -> TranscriptConfigBuilder {
        TranscriptConfigBuilder {
            num_wires_cap: 16,
            num_plonk_zs_partial_products_cap: 16,
            num_quotient_polys_cap: 16,
            num_openings_constants: 4,
            num_openings_plonk_sigmas: 80,
            num_openings_wires: 135,
            num_openings_plonk_zs: 2,
            num_openings_plonk_zs_next: 2,
            num_openings_partial_products: 18,
            num_openings_quotient_polys: 16,
            num_fri_commit_round: 2,
            fri_commit_merkle_cap_height: 16,
            num_fri_query_round: 28,
            num_fri_query_init_constants_sigmas_v: 84,
            num_fri_query_init_constants_sigmas_p: 8,
            num_fri_query_init_wires_v: 135,
            num_fri_query_init_wires_p: 8,
            num_fri_query_init_zs_partial_v: 20,
            num_fri_query_init_zs_partial_p: 8,
            num_fri_query_init_quotient_v: 16,
            num_fri_query_init_quotient_p: 8,
            num_fri_query_step0_v: 8,
            num_fri_query_step0_p: 5,
            num_fri_query_step1_v: 8,
            num_fri_query_step1_p: 2,
            num_fri_final_poly_ext_v: 8,
            num_public_inputs: 4,
            ..TranscriptConfigBuilder::new()
        }
    }

    #[test]
    fn proof_size_matches_layout() {
        let config = plonky2_like().build().expect("valid config");
        let layout = config.layout();
        let last = layout.last().expect("non-empty layout");
        assert_eq!(last.end(), config.proof_size());
        let covered: usize = layout.iter().map(|span| span.len).sum();
        assert_eq!(covered, config.proof_size());
    }

    #[test]
    fn query_round_size_accounts_for_prefixes() {
        let config = plonky2_like().build().expect("valid config");
        let expected = (84 + 135 + 20 + 16) * 8 + (8 + 8) * 16 + 6 + (8 * 4 + 5 + 2) * 32;
        assert_eq!(config.query_round_size(), expected);
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let config = plonky2_like().build().expect("valid config");
        let json = config.to_json().expect("render");
        assert!(json.contains("\"num_fri_query_init_wires_v\": 135"));
        let parsed = TranscriptConfig::from_json(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn serde_goes_through_validation() {
        let mut raw = serde_json::to_value(plonky2_like()).expect("value");
        raw["merkle_height_size"] = serde_json::json!(2);
        let err = serde_json::from_value::<TranscriptConfig>(raw).unwrap_err();
        assert!(err.to_string().contains("length prefix width 2"));
    }
}
