use core::fmt;
use serde::{Deserialize, Serialize};

use crate::field::{ExtFieldElement, FieldElement};
use crate::fri::FriProof;
use crate::merkle::MerkleCap;

/// Opening sequence, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningCategory {
    Constants,
    PlonkSigmas,
    Wires,
    PlonkZs,
    PlonkZsNext,
    PartialProducts,
    QuotientPolys,
}

impl OpeningCategory {
    /// All categories in wire order.
    pub const ALL: [OpeningCategory; 7] = [
        OpeningCategory::Constants,
        OpeningCategory::PlonkSigmas,
        OpeningCategory::Wires,
        OpeningCategory::PlonkZs,
        OpeningCategory::PlonkZsNext,
        OpeningCategory::PartialProducts,
        OpeningCategory::QuotientPolys,
    ];

    /// Snake-case name used in diagnostics and JSON keys.
    pub const fn name(self) -> &'static str {
        match self {
            OpeningCategory::Constants => "constants",
            OpeningCategory::PlonkSigmas => "plonk_sigmas",
            OpeningCategory::Wires => "wires",
            OpeningCategory::PlonkZs => "plonk_zs",
            OpeningCategory::PlonkZsNext => "plonk_zs_next",
            OpeningCategory::PartialProducts => "partial_products",
            OpeningCategory::QuotientPolys => "quotient_polys",
        }
    }
}

impl fmt::Display for OpeningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Claimed polynomial openings at the challenge point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningSet {
    pub constants: Vec<ExtFieldElement>,
    pub plonk_sigmas: Vec<ExtFieldElement>,
    pub wires: Vec<ExtFieldElement>,
    pub plonk_zs: Vec<ExtFieldElement>,
    pub plonk_zs_next: Vec<ExtFieldElement>,
    pub partial_products: Vec<ExtFieldElement>,
    pub quotient_polys: Vec<ExtFieldElement>,
}

impl OpeningSet {
    /// Sequence stored for `category`.
    pub fn get(&self, category: OpeningCategory) -> &[ExtFieldElement] {
        match category {
            OpeningCategory::Constants => &self.constants,
            OpeningCategory::PlonkSigmas => &self.plonk_sigmas,
            OpeningCategory::Wires => &self.wires,
            OpeningCategory::PlonkZs => &self.plonk_zs,
            OpeningCategory::PlonkZsNext => &self.plonk_zs_next,
            OpeningCategory::PartialProducts => &self.partial_products,
            OpeningCategory::QuotientPolys => &self.quotient_polys,
        }
    }

    pub(crate) fn get_mut(&mut self, category: OpeningCategory) -> &mut Vec<ExtFieldElement> {
        match category {
            OpeningCategory::Constants => &mut self.constants,
            OpeningCategory::PlonkSigmas => &mut self.plonk_sigmas,
            OpeningCategory::Wires => &mut self.wires,
            OpeningCategory::PlonkZs => &mut self.plonk_zs,
            OpeningCategory::PlonkZsNext => &mut self.plonk_zs_next,
            OpeningCategory::PartialProducts => &mut self.partial_products,
            OpeningCategory::QuotientPolys => &mut self.quotient_polys,
        }
    }
}

/// Fully decoded proof transcript.
///
/// Every element owns its bytes; the value does not borrow from the buffer it
/// was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub wires_cap: MerkleCap,
    pub plonk_zs_partial_products_cap: MerkleCap,
    pub quotient_polys_cap: MerkleCap,
    pub openings: OpeningSet,
    pub opening_proof: FriProof,
    pub public_inputs: Vec<FieldElement>,
}

impl Proof {
    /// Proof-of-work witness of the FRI proof.
    pub fn pow_witness(&self) -> &FieldElement {
        &self.opening_proof.pow_witness
    }

    /// Number of FRI query rounds.
    pub fn num_query_rounds(&self) -> usize {
        self.opening_proof.query_round_proofs.len()
    }
}
