//! FRI proof data as carried by a transcript.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::field::{ExtFieldElement, FieldElement};
use crate::merkle::{MerkleCap, MerkleProof};

/// Committed vector opened by every query round, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafGroup {
    /// Initial tree over constants and permutation sigmas.
    ConstantsSigmas,
    /// Initial tree over the wires.
    Wires,
    /// Initial tree over the permutation Zs and partial products.
    ZsPartial,
    /// Initial tree over the quotient chunks.
    Quotient,
    /// First folding step.
    Step0,
    /// Second folding step.
    Step1,
}

impl LeafGroup {
    /// All groups in wire order.
    pub const ALL: [LeafGroup; 6] = [
        LeafGroup::ConstantsSigmas,
        LeafGroup::Wires,
        LeafGroup::ZsPartial,
        LeafGroup::Quotient,
        LeafGroup::Step0,
        LeafGroup::Step1,
    ];

    /// Snake-case name used in diagnostics and JSON keys.
    pub const fn name(self) -> &'static str {
        match self {
            LeafGroup::ConstantsSigmas => "constants_sigmas",
            LeafGroup::Wires => "wires",
            LeafGroup::ZsPartial => "zs_partial",
            LeafGroup::Quotient => "quotient",
            LeafGroup::Step0 => "step0",
            LeafGroup::Step1 => "step1",
        }
    }

    /// Folding-step groups hold extension-field values; initial trees hold base-field values.
    pub const fn is_extension(self) -> bool {
        matches!(self, LeafGroup::Step0 | LeafGroup::Step1)
    }
}

impl fmt::Display for LeafGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Part of a leaf group, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafPart {
    Values,
    LengthPrefix,
    Proof,
}

impl fmt::Display for LeafPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafPart::Values => write!(f, "values"),
            LeafPart::LengthPrefix => write!(f, "length_prefix"),
            LeafPart::Proof => write!(f, "proof"),
        }
    }
}

/// Opened leaf values together with their authentication path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLeaf<T> {
    pub values: Vec<T>,
    pub merkle_proof: MerkleProof,
}

/// One FRI query. Rounds are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriQueryRound {
    pub constants_sigmas: QueryLeaf<FieldElement>,
    pub wires: QueryLeaf<FieldElement>,
    pub zs_partial: QueryLeaf<FieldElement>,
    pub quotient: QueryLeaf<FieldElement>,
    pub step0: QueryLeaf<ExtFieldElement>,
    pub step1: QueryLeaf<ExtFieldElement>,
}

impl FriQueryRound {
    /// Authentication path of `group`.
    pub fn merkle_proof(&self, group: LeafGroup) -> &MerkleProof {
        match group {
            LeafGroup::ConstantsSigmas => &self.constants_sigmas.merkle_proof,
            LeafGroup::Wires => &self.wires.merkle_proof,
            LeafGroup::ZsPartial => &self.zs_partial.merkle_proof,
            LeafGroup::Quotient => &self.quotient.merkle_proof,
            LeafGroup::Step0 => &self.step0.merkle_proof,
            LeafGroup::Step1 => &self.step1.merkle_proof,
        }
    }

    /// Number of opened values in `group`.
    pub fn value_count(&self, group: LeafGroup) -> usize {
        match group {
            LeafGroup::ConstantsSigmas => self.constants_sigmas.values.len(),
            LeafGroup::Wires => self.wires.values.len(),
            LeafGroup::ZsPartial => self.zs_partial.values.len(),
            LeafGroup::Quotient => self.quotient.values.len(),
            LeafGroup::Step0 => self.step0.values.len(),
            LeafGroup::Step1 => self.step1.values.len(),
        }
    }
}

/// Merkle caps committed during the FRI commit phase, one per round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriCommitPhaseCaps(pub Vec<MerkleCap>);

impl FriCommitPhaseCaps {
    /// Number of commit rounds.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no commit round was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// FRI opening proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriProof {
    pub commit_phase_merkle_caps: FriCommitPhaseCaps,
    pub query_round_proofs: Vec<FriQueryRound>,
    /// Final polynomial coefficients.
    pub final_poly: Vec<ExtFieldElement>,
    pub pow_witness: FieldElement,
}
