//! Circuit-input rendering of a decoded [`Proof`].
//!
//! The verifier circuit takes every element as decimal strings of 64-bit
//! limbs: a digest becomes its little-endian `u64` limbs, an extension element
//! its two coefficients, a base-field element a single value. Query-round data
//! is transposed so each leaf group becomes one array indexed by round.
//!
//! Values are rendered verbatim from their limbs; no modular reduction takes
//! place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{Element, ExtFieldElement, FieldElement};
use crate::fri::{FriQueryRound, LeafGroup, QueryLeaf};
use crate::merkle::{Digest, MerkleCap};
use crate::proof::Proof;

const LIMB_BYTES: usize = 8;

/// Failure while rendering circuit inputs.
#[derive(Debug, Error)]
pub enum CircuitError {
    /// An element width cannot be split into 64-bit limbs.
    #[error("{element} of {width} bytes cannot be split into 64-bit limbs")]
    LimbWidth {
        /// Kind of element.
        element: &'static str,
        /// Width found.
        width: usize,
    },
    /// The inputs could not be rendered as JSON.
    #[error("failed to render circuit inputs: {0}")]
    Json(#[from] serde_json::Error),
}

type Limbs = Vec<String>;

/// Proof laid out as verifier-circuit inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitInputs {
    pub wires_cap: Vec<Limbs>,
    pub plonk_zs_partial_products_cap: Vec<Limbs>,
    pub quotient_polys_cap: Vec<Limbs>,

    pub openings_constants: Vec<Limbs>,
    pub openings_plonk_sigmas: Vec<Limbs>,
    pub openings_wires: Vec<Limbs>,
    pub openings_plonk_zs: Vec<Limbs>,
    pub openings_plonk_zs_next: Vec<Limbs>,
    pub openings_partial_products: Vec<Limbs>,
    pub openings_quotient_polys: Vec<Limbs>,

    pub fri_commit_phase_merkle_caps: Vec<Vec<Limbs>>,

    pub fri_query_init_constants_sigmas_v: Vec<Vec<String>>,
    pub fri_query_init_constants_sigmas_p: Vec<Vec<Limbs>>,
    pub fri_query_init_wires_v: Vec<Vec<String>>,
    pub fri_query_init_wires_p: Vec<Vec<Limbs>>,
    pub fri_query_init_zs_partial_v: Vec<Vec<String>>,
    pub fri_query_init_zs_partial_p: Vec<Vec<Limbs>>,
    pub fri_query_init_quotient_v: Vec<Vec<String>>,
    pub fri_query_init_quotient_p: Vec<Vec<Limbs>>,

    pub fri_query_step0_v: Vec<Vec<Limbs>>,
    pub fri_query_step0_p: Vec<Vec<Limbs>>,
    pub fri_query_step1_v: Vec<Vec<Limbs>>,
    pub fri_query_step1_p: Vec<Vec<Limbs>>,

    pub fri_final_poly_ext_v: Vec<Limbs>,
    pub fri_pow_witness: String,

    pub public_inputs: Vec<String>,
}

fn limbs(bytes: &[u8], element: &'static str) -> Result<Limbs, CircuitError> {
    if bytes.is_empty() || bytes.len() % LIMB_BYTES != 0 {
        return Err(CircuitError::LimbWidth {
            element,
            width: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(LIMB_BYTES)
        .map(|chunk| {
            let mut limb = [0u8; LIMB_BYTES];
            limb.copy_from_slice(chunk);
            u64::from_le_bytes(limb).to_string()
        })
        .collect())
}

fn scalar(element: &FieldElement) -> Result<String, CircuitError> {
    let bytes = element.as_bytes();
    if bytes.len() != LIMB_BYTES {
        return Err(CircuitError::LimbWidth {
            element: "field element",
            width: bytes.len(),
        });
    }
    let mut limb = [0u8; LIMB_BYTES];
    limb.copy_from_slice(bytes);
    Ok(u64::from_le_bytes(limb).to_string())
}

fn digests<'a>(items: impl IntoIterator<Item = &'a Digest>) -> Result<Vec<Limbs>, CircuitError> {
    items
        .into_iter()
        .map(|digest| limbs(digest.as_bytes(), "digest"))
        .collect()
}

fn cap(cap: &MerkleCap) -> Result<Vec<Limbs>, CircuitError> {
    digests(cap.iter())
}

fn ext_elements(items: &[ExtFieldElement]) -> Result<Vec<Limbs>, CircuitError> {
    items
        .iter()
        .map(|item| limbs(item.as_bytes(), "extension field element"))
        .collect()
}

fn scalars(items: &[FieldElement]) -> Result<Vec<String>, CircuitError> {
    items.iter().map(scalar).collect()
}

/// Per-round values and paths of one initial-tree group.
fn init_group<'a>(
    rounds: &'a [FriQueryRound],
    leaf: impl Fn(&'a FriQueryRound) -> &'a QueryLeaf<FieldElement>,
) -> Result<(Vec<Vec<String>>, Vec<Vec<Limbs>>), CircuitError> {
    let mut values = Vec::with_capacity(rounds.len());
    let mut paths = Vec::with_capacity(rounds.len());
    for round in rounds {
        let leaf = leaf(round);
        values.push(scalars(&leaf.values)?);
        paths.push(digests(&leaf.merkle_proof.siblings)?);
    }
    Ok((values, paths))
}

/// Per-round values and paths of one folding-step group.
fn step_group<'a>(
    rounds: &'a [FriQueryRound],
    leaf: impl Fn(&'a FriQueryRound) -> &'a QueryLeaf<ExtFieldElement>,
) -> Result<(Vec<Vec<Limbs>>, Vec<Vec<Limbs>>), CircuitError> {
    let mut values = Vec::with_capacity(rounds.len());
    let mut paths = Vec::with_capacity(rounds.len());
    for round in rounds {
        let leaf = leaf(round);
        values.push(ext_elements(&leaf.values)?);
        paths.push(digests(&leaf.merkle_proof.siblings)?);
    }
    Ok((values, paths))
}

impl CircuitInputs {
    /// Renders `proof` as circuit inputs.
    pub fn from_proof(proof: &Proof) -> Result<Self, CircuitError> {
        let fri = &proof.opening_proof;
        let rounds = fri.query_round_proofs.as_slice();

        let (cs_v, cs_p) = init_group(rounds, |round| &round.constants_sigmas)?;
        let (wires_v, wires_p) = init_group(rounds, |round| &round.wires)?;
        let (zs_v, zs_p) = init_group(rounds, |round| &round.zs_partial)?;
        let (quotient_v, quotient_p) = init_group(rounds, |round| &round.quotient)?;
        let (step0_v, step0_p) = step_group(rounds, |round| &round.step0)?;
        let (step1_v, step1_p) = step_group(rounds, |round| &round.step1)?;
        tracing::trace!(
            rounds = rounds.len(),
            groups = LeafGroup::ALL.len(),
            "rendered query rounds"
        );

        Ok(Self {
            wires_cap: cap(&proof.wires_cap)?,
            plonk_zs_partial_products_cap: cap(&proof.plonk_zs_partial_products_cap)?,
            quotient_polys_cap: cap(&proof.quotient_polys_cap)?,
            openings_constants: ext_elements(&proof.openings.constants)?,
            openings_plonk_sigmas: ext_elements(&proof.openings.plonk_sigmas)?,
            openings_wires: ext_elements(&proof.openings.wires)?,
            openings_plonk_zs: ext_elements(&proof.openings.plonk_zs)?,
            openings_plonk_zs_next: ext_elements(&proof.openings.plonk_zs_next)?,
            openings_partial_products: ext_elements(&proof.openings.partial_products)?,
            openings_quotient_polys: ext_elements(&proof.openings.quotient_polys)?,
            fri_commit_phase_merkle_caps: fri
                .commit_phase_merkle_caps
                .0
                .iter()
                .map(cap)
                .collect::<Result<_, _>>()?,
            fri_query_init_constants_sigmas_v: cs_v,
            fri_query_init_constants_sigmas_p: cs_p,
            fri_query_init_wires_v: wires_v,
            fri_query_init_wires_p: wires_p,
            fri_query_init_zs_partial_v: zs_v,
            fri_query_init_zs_partial_p: zs_p,
            fri_query_init_quotient_v: quotient_v,
            fri_query_init_quotient_p: quotient_p,
            fri_query_step0_v: step0_v,
            fri_query_step0_p: step0_p,
            fri_query_step1_v: step1_v,
            fri_query_step1_p: step1_p,
            fri_final_poly_ext_v: ext_elements(&fri.final_poly)?,
            fri_pow_witness: scalar(&fri.pow_witness)?,
            public_inputs: scalars(&proof.public_inputs)?,
        })
    }

    /// Renders the inputs as a JSON document.
    pub fn to_json(&self) -> Result<String, CircuitError> {
        Ok(serde_json::to_string(self)?)
    }
}
