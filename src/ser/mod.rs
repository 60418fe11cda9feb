//! Byte-level primitives shared by every section parser.
//!
//! The transcript format is not self-describing: each region is a run of
//! fixed-width elements whose count and width come from the
//! [`TranscriptConfig`](crate::config::TranscriptConfig). The only in-band
//! metadata is the one-byte length prefix that precedes every FRI query-round
//! Merkle proof, which is cross-checked rather than trusted.

mod bytes;
mod collections;
mod cursor;
mod error;

pub use bytes::{ensure_consumed, read_length_prefix, write_length_prefix};
pub use collections::{
    bounded_capacity, decode_grid, decode_sequence, write_element, write_sequence,
};
pub use cursor::ByteReader;
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult, FormatMismatch, Section};
