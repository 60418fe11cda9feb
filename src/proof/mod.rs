//! # Proof module overview
//!
//! ```text
//! proof
//! ├── types  — the decoded [`Proof`] aggregate and its opening set
//! └── ser    — section parsers, the transcript assembler and the encoder
//! ```

pub mod ser;
pub mod types;

pub use ser::{
    deserialize_proof, read_openings, read_public_inputs, read_trace_caps, serialize_proof,
};
pub use types::{OpeningCategory, OpeningSet, Proof};
