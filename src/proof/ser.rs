//! Proof transcript assembly.
//!
//! The transcript is the concatenation of fixed-width runs, in this order:
//!
//! ```text
//! +---------------------------------+--------------------------------------+
//! | Section                         | Size (bytes)                         |
//! +=================================+======================================+
//! | wires_cap                       | num_wires_cap * hash                 |
//! | plonk_zs_partial_products_cap   | num_..._cap * hash                   |
//! | quotient_polys_cap              | num_quotient_polys_cap * hash        |
//! | openings (7 sequences)          | num_openings_* * ext                 |
//! | fri commit phase caps           | rounds * cap height * hash           |
//! | fri query rounds                | rounds * query_round_size            |
//! | fri final poly                  | num_fri_final_poly_ext_v * ext       |
//! | fri pow witness                 | field                                |
//! | public inputs                   | num_public_inputs * field            |
//! +---------------------------------+--------------------------------------+
//! ```
//!
//! Decoding is all-or-nothing: an underflow anywhere, a length-prefix
//! mismatch or unread trailing bytes fail the whole call.

use super::types::{OpeningCategory, OpeningSet, Proof};
use crate::config::TranscriptConfig;
use crate::field::FieldElement;
use crate::fri::{read_fri_proof, write_fri_proof};
use crate::merkle::{read_merkle_cap, write_merkle_cap, MerkleCap};
use crate::ser::{
    decode_sequence, ensure_consumed, write_sequence, ByteReader, DecodeResult, EncodeResult,
    Section,
};

/// Reads the three trace caps in wire order.
pub fn read_trace_caps(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<[MerkleCap; 3]> {
    let hash_size = config.sizes().hash;
    let caps = config.caps();
    let wires = read_merkle_cap(cursor, hash_size, caps.wires, Section::WiresCap)?;
    let zs = read_merkle_cap(
        cursor,
        hash_size,
        caps.plonk_zs_partial_products,
        Section::PlonkZsPartialProductsCap,
    )?;
    let quotient =
        read_merkle_cap(cursor, hash_size, caps.quotient_polys, Section::QuotientPolysCap)?;
    Ok([wires, zs, quotient])
}

/// Reads the seven opening sequences.
pub fn read_openings(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<OpeningSet> {
    let ext_size = config.sizes().ext_field;
    let mut openings = OpeningSet::default();
    for category in OpeningCategory::ALL {
        let count = config.openings().get(category);
        *openings.get_mut(category) =
            decode_sequence(cursor, ext_size, count, Section::Openings(category))?;
    }
    Ok(openings)
}

/// Reads the trailing public inputs.
pub fn read_public_inputs(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<Vec<FieldElement>> {
    decode_sequence(
        cursor,
        config.sizes().field,
        config.num_public_inputs(),
        Section::PublicInputs,
    )
}

/// Decodes a complete transcript.
///
/// Runs every section parser in wire order over one cursor and requires the
/// buffer to be fully consumed. The returned [`Proof`] owns copies of all
/// bytes, so `bytes` may be dropped as soon as this returns.
pub fn deserialize_proof(bytes: &[u8], config: &TranscriptConfig) -> DecodeResult<Proof> {
    let span = tracing::debug_span!("deserialize_proof", len = bytes.len());
    let _guard = span.enter();

    let mut cursor = ByteReader::new(bytes);
    let [wires_cap, plonk_zs_partial_products_cap, quotient_polys_cap] =
        read_trace_caps(&mut cursor, config)?;
    tracing::trace!(offset = cursor.position(), "decoded trace caps");
    let openings = read_openings(&mut cursor, config)?;
    tracing::trace!(offset = cursor.position(), "decoded openings");
    let opening_proof = read_fri_proof(&mut cursor, config)?;
    let public_inputs = read_public_inputs(&mut cursor, config)?;
    ensure_consumed(&cursor)?;

    tracing::debug!(
        query_rounds = opening_proof.query_round_proofs.len(),
        public_inputs = public_inputs.len(),
        "decoded proof transcript"
    );
    Ok(Proof {
        wires_cap,
        plonk_zs_partial_products_cap,
        quotient_polys_cap,
        openings,
        opening_proof,
        public_inputs,
    })
}

/// Encodes `proof` in the transcript layout described by `config`.
///
/// Shapes and element widths are checked against the configuration; the
/// output of a successful call always decodes back to an equal [`Proof`].
pub fn serialize_proof(proof: &Proof, config: &TranscriptConfig) -> EncodeResult<Vec<u8>> {
    let sizes = config.sizes();
    let caps = config.caps();
    let mut out = Vec::with_capacity(config.proof_size());

    write_merkle_cap(&mut out, &proof.wires_cap, sizes.hash, caps.wires, Section::WiresCap)?;
    write_merkle_cap(
        &mut out,
        &proof.plonk_zs_partial_products_cap,
        sizes.hash,
        caps.plonk_zs_partial_products,
        Section::PlonkZsPartialProductsCap,
    )?;
    write_merkle_cap(
        &mut out,
        &proof.quotient_polys_cap,
        sizes.hash,
        caps.quotient_polys,
        Section::QuotientPolysCap,
    )?;
    for category in OpeningCategory::ALL {
        write_sequence(
            &mut out,
            proof.openings.get(category),
            sizes.ext_field,
            config.openings().get(category),
            Section::Openings(category),
        )?;
    }
    write_fri_proof(&mut out, &proof.opening_proof, config)?;
    write_sequence(
        &mut out,
        &proof.public_inputs,
        sizes.field,
        config.num_public_inputs(),
        Section::PublicInputs,
    )?;
    Ok(out)
}
