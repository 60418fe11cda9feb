//! Merkle commitment data as it appears in a transcript.
//!
//! Only the shapes are modelled: caps are ordered digest lists and
//! authentication paths are ordered sibling lists. No hashing happens here.

mod ser;
mod types;

pub use ser::{read_merkle_cap, read_merkle_proof, write_merkle_cap, write_merkle_proof};
pub use types::{Digest, MerkleCap, MerkleProof};
