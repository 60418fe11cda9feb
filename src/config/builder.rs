use serde::{Deserialize, Serialize};

use super::validate::{validate, ConfigError};
use super::{
    CapCounts, ElementSizes, FriShape, LeafShape, OpeningCounts, TranscriptConfig,
};

/// Flat, unvalidated transcript description.
///
/// Field names follow the `conf.json` side file emitted next to every proof,
/// so the builder deserialises that file directly. [`build`](Self::build)
/// validates the record and freezes it into a [`TranscriptConfig`].
///
/// | Field | Default |
/// |-------|---------|
/// | `hash_size` | `32` (four Goldilocks limbs) |
/// | `field_size` | `8` |
/// | `ext_field_size` | `16` (quadratic extension) |
/// | `merkle_height_size` | `1` |
/// | every count | `0` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfigBuilder {
    pub hash_size: usize,
    pub field_size: usize,
    pub ext_field_size: usize,
    /// Width of the in-band Merkle proof length prefix.
    pub merkle_height_size: usize,

    pub num_wires_cap: usize,
    pub num_plonk_zs_partial_products_cap: usize,
    pub num_quotient_polys_cap: usize,

    pub num_openings_constants: usize,
    pub num_openings_plonk_sigmas: usize,
    pub num_openings_wires: usize,
    pub num_openings_plonk_zs: usize,
    pub num_openings_plonk_zs_next: usize,
    pub num_openings_partial_products: usize,
    pub num_openings_quotient_polys: usize,

    pub num_fri_commit_round: usize,
    pub fri_commit_merkle_cap_height: usize,
    pub num_fri_query_round: usize,
    pub num_fri_query_init_constants_sigmas_v: usize,
    pub num_fri_query_init_constants_sigmas_p: usize,
    pub num_fri_query_init_wires_v: usize,
    pub num_fri_query_init_wires_p: usize,
    pub num_fri_query_init_zs_partial_v: usize,
    pub num_fri_query_init_zs_partial_p: usize,
    pub num_fri_query_init_quotient_v: usize,
    pub num_fri_query_init_quotient_p: usize,
    pub num_fri_query_step0_v: usize,
    pub num_fri_query_step0_p: usize,
    pub num_fri_query_step1_v: usize,
    pub num_fri_query_step1_p: usize,
    pub num_fri_final_poly_ext_v: usize,

    pub num_public_inputs: usize,
}

impl TranscriptConfigBuilder {
    /// Returns a builder with Goldilocks element widths and zero counts.
    pub fn new() -> Self {
        Self {
            hash_size: 32,
            field_size: 8,
            ext_field_size: 16,
            merkle_height_size: 1,
            num_wires_cap: 0,
            num_plonk_zs_partial_products_cap: 0,
            num_quotient_polys_cap: 0,
            num_openings_constants: 0,
            num_openings_plonk_sigmas: 0,
            num_openings_wires: 0,
            num_openings_plonk_zs: 0,
            num_openings_plonk_zs_next: 0,
            num_openings_partial_products: 0,
            num_openings_quotient_polys: 0,
            num_fri_commit_round: 0,
            fri_commit_merkle_cap_height: 0,
            num_fri_query_round: 0,
            num_fri_query_init_constants_sigmas_v: 0,
            num_fri_query_init_constants_sigmas_p: 0,
            num_fri_query_init_wires_v: 0,
            num_fri_query_init_wires_p: 0,
            num_fri_query_init_zs_partial_v: 0,
            num_fri_query_init_zs_partial_p: 0,
            num_fri_query_init_quotient_v: 0,
            num_fri_query_init_quotient_p: 0,
            num_fri_query_step0_v: 0,
            num_fri_query_step0_p: 0,
            num_fri_query_step1_v: 0,
            num_fri_query_step1_p: 0,
            num_fri_final_poly_ext_v: 0,
            num_public_inputs: 0,
        }
    }

    /// Validates the record and returns the frozen configuration.
    pub fn build(self) -> Result<TranscriptConfig, ConfigError> {
        let config = TranscriptConfig {
            sizes: ElementSizes {
                field: self.field_size,
                ext_field: self.ext_field_size,
                hash: self.hash_size,
                length_prefix: self.merkle_height_size,
            },
            caps: CapCounts {
                wires: self.num_wires_cap,
                plonk_zs_partial_products: self.num_plonk_zs_partial_products_cap,
                quotient_polys: self.num_quotient_polys_cap,
            },
            openings: OpeningCounts {
                constants: self.num_openings_constants,
                plonk_sigmas: self.num_openings_plonk_sigmas,
                wires: self.num_openings_wires,
                plonk_zs: self.num_openings_plonk_zs,
                plonk_zs_next: self.num_openings_plonk_zs_next,
                partial_products: self.num_openings_partial_products,
                quotient_polys: self.num_openings_quotient_polys,
            },
            fri: FriShape {
                num_commit_rounds: self.num_fri_commit_round,
                commit_cap_height: self.fri_commit_merkle_cap_height,
                num_query_rounds: self.num_fri_query_round,
                constants_sigmas: LeafShape::new(
                    self.num_fri_query_init_constants_sigmas_v,
                    self.num_fri_query_init_constants_sigmas_p,
                ),
                wires: LeafShape::new(
                    self.num_fri_query_init_wires_v,
                    self.num_fri_query_init_wires_p,
                ),
                zs_partial: LeafShape::new(
                    self.num_fri_query_init_zs_partial_v,
                    self.num_fri_query_init_zs_partial_p,
                ),
                quotient: LeafShape::new(
                    self.num_fri_query_init_quotient_v,
                    self.num_fri_query_init_quotient_p,
                ),
                step0: LeafShape::new(self.num_fri_query_step0_v, self.num_fri_query_step0_p),
                step1: LeafShape::new(self.num_fri_query_step1_v, self.num_fri_query_step1_p),
                final_poly_len: self.num_fri_final_poly_ext_v,
            },
            num_public_inputs: self.num_public_inputs,
            proof_size: 0,
        };
        let proof_size = validate(&config)?;
        tracing::debug!(proof_size, "transcript configuration validated");
        Ok(TranscriptConfig {
            proof_size,
            ..config
        })
    }
}

impl Default for TranscriptConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TranscriptConfig> for TranscriptConfigBuilder {
    fn from(config: TranscriptConfig) -> Self {
        let TranscriptConfig {
            sizes,
            caps,
            openings,
            fri,
            num_public_inputs,
            proof_size: _,
        } = config;
        Self {
            hash_size: sizes.hash,
            field_size: sizes.field,
            ext_field_size: sizes.ext_field,
            merkle_height_size: sizes.length_prefix,
            num_wires_cap: caps.wires,
            num_plonk_zs_partial_products_cap: caps.plonk_zs_partial_products,
            num_quotient_polys_cap: caps.quotient_polys,
            num_openings_constants: openings.constants,
            num_openings_plonk_sigmas: openings.plonk_sigmas,
            num_openings_wires: openings.wires,
            num_openings_plonk_zs: openings.plonk_zs,
            num_openings_plonk_zs_next: openings.plonk_zs_next,
            num_openings_partial_products: openings.partial_products,
            num_openings_quotient_polys: openings.quotient_polys,
            num_fri_commit_round: fri.num_commit_rounds,
            fri_commit_merkle_cap_height: fri.commit_cap_height,
            num_fri_query_round: fri.num_query_rounds,
            num_fri_query_init_constants_sigmas_v: fri.constants_sigmas.values,
            num_fri_query_init_constants_sigmas_p: fri.constants_sigmas.proof_depth,
            num_fri_query_init_wires_v: fri.wires.values,
            num_fri_query_init_wires_p: fri.wires.proof_depth,
            num_fri_query_init_zs_partial_v: fri.zs_partial.values,
            num_fri_query_init_zs_partial_p: fri.zs_partial.proof_depth,
            num_fri_query_init_quotient_v: fri.quotient.values,
            num_fri_query_init_quotient_p: fri.quotient.proof_depth,
            num_fri_query_step0_v: fri.step0.values,
            num_fri_query_step0_p: fri.step0.proof_depth,
            num_fri_query_step1_v: fri.step1.values,
            num_fri_query_step1_p: fri.step1.proof_depth,
            num_fri_final_poly_ext_v: fri.final_poly_len,
            num_public_inputs,
        }
    }
}

impl TryFrom<TranscriptConfigBuilder> for TranscriptConfig {
    type Error = ConfigError;

    fn try_from(builder: TranscriptConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
