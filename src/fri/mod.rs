//! FRI opening proof: commit-phase caps, query rounds, final polynomial and
//! proof-of-work witness.

pub mod ser;
pub mod types;

pub use ser::{
    read_commit_phase_caps, read_final_poly, read_fri_proof, read_pow_witness, read_query_leaf,
    read_query_round, read_query_rounds, write_fri_proof, write_query_round,
};
pub use types::{FriCommitPhaseCaps, FriProof, FriQueryRound, LeafGroup, LeafPart, QueryLeaf};
