//! Utility helpers for the transcript codec.
//! Includes the transcript byte wrapper and serde adapters.

pub mod serialization;

pub use serialization::ProofBytes;
