use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::Element;

/// Opaque hash digest, `hash_size` bytes wide.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest {
    #[serde(with = "crate::utils::serialization::hex_bytes")]
    bytes: Vec<u8>,
}

impl Digest {
    /// Creates a digest from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the zero digest of the provided size.
    pub fn zero(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len],
        }
    }

    /// Consumes the digest and returns the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Element for Digest {
    fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x")?;
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Top layer of a Merkle tree, stored left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleCap(pub Vec<Digest>);

impl MerkleCap {
    /// Number of digests in the cap.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the cap holds no digests.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the digests in cap order.
    pub fn iter(&self) -> impl Iterator<Item = &Digest> {
        self.0.iter()
    }
}

/// Authentication path for a single queried leaf, sibling digests bottom-up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub siblings: Vec<Digest>,
}

impl MerkleProof {
    /// Number of sibling digests, i.e. the path depth below the cap.
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }
}
