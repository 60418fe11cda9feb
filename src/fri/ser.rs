//! Section parsers for the FRI part of a transcript.
//!
//! ```text
//! commit caps      num_fri_commit_round x cap(fri_commit_merkle_cap_height)
//! query rounds     num_fri_query_round x {
//!                      for group in constants_sigmas, wires, zs_partial,
//!                                   quotient, step0, step1:
//!                          values (field or ext elements)
//!                          depth  (u8, must equal the configured depth)
//!                          siblings (depth digests)
//!                  }
//! final poly       num_fri_final_poly_ext_v ext elements
//! pow witness      one field element
//! ```

use super::types::{FriCommitPhaseCaps, FriProof, FriQueryRound, LeafGroup, LeafPart, QueryLeaf};
use crate::config::TranscriptConfig;
use crate::field::{Element, ExtFieldElement, FieldElement};
use crate::merkle::{read_merkle_cap, read_merkle_proof, write_merkle_cap, write_merkle_proof};
use crate::ser::{
    bounded_capacity, decode_sequence, read_length_prefix, write_element, write_length_prefix,
    write_sequence, ByteReader, DecodeResult, EncodeError, EncodeResult, Section,
};

/// Reads the commit-phase caps as independent caps, one per commit round.
pub fn read_commit_phase_caps(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<FriCommitPhaseCaps> {
    let fri = config.fri();
    let hash_size = config.sizes().hash;
    let cap_size = fri.commit_cap_height.saturating_mul(hash_size);
    let mut caps = Vec::with_capacity(bounded_capacity(
        fri.num_commit_rounds,
        cursor.remaining(),
        cap_size,
    ));
    for round in 0..fri.num_commit_rounds {
        let section = Section::FriCommitPhaseCaps { round };
        caps.push(read_merkle_cap(cursor, hash_size, fri.commit_cap_height, section)?);
    }
    Ok(FriCommitPhaseCaps(caps))
}

/// Reads one leaf group: values, checked length prefix, then siblings.
///
/// `T` must match the value type of `group`; the element width is taken from
/// the configuration for that group.
pub fn read_query_leaf<T: Element>(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
    round: usize,
    group: LeafGroup,
) -> DecodeResult<QueryLeaf<T>> {
    let sizes = config.sizes();
    let shape = config.fri().leaf(group);
    let section = |part| Section::FriQuery { round, group, part };

    let values = decode_sequence::<T>(
        cursor,
        sizes.value_width(group),
        shape.values,
        section(LeafPart::Values),
    )?;
    read_length_prefix(
        cursor,
        round,
        group,
        shape.proof_depth,
        section(LeafPart::LengthPrefix),
    )?;
    let merkle_proof =
        read_merkle_proof(cursor, sizes.hash, shape.proof_depth, section(LeafPart::Proof))?;
    Ok(QueryLeaf {
        values,
        merkle_proof,
    })
}

/// Reads query round `round`.
pub fn read_query_round(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
    round: usize,
) -> DecodeResult<FriQueryRound> {
    Ok(FriQueryRound {
        constants_sigmas: read_query_leaf::<FieldElement>(
            cursor,
            config,
            round,
            LeafGroup::ConstantsSigmas,
        )?,
        wires: read_query_leaf::<FieldElement>(cursor, config, round, LeafGroup::Wires)?,
        zs_partial: read_query_leaf::<FieldElement>(cursor, config, round, LeafGroup::ZsPartial)?,
        quotient: read_query_leaf::<FieldElement>(cursor, config, round, LeafGroup::Quotient)?,
        step0: read_query_leaf::<ExtFieldElement>(cursor, config, round, LeafGroup::Step0)?,
        step1: read_query_leaf::<ExtFieldElement>(cursor, config, round, LeafGroup::Step1)?,
    })
}

/// Reads every configured query round in order.
pub fn read_query_rounds(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<Vec<FriQueryRound>> {
    let rounds = config.fri().num_query_rounds;
    let mut out = Vec::with_capacity(bounded_capacity(
        rounds,
        cursor.remaining(),
        config.query_round_size(),
    ));
    for round in 0..rounds {
        out.push(read_query_round(cursor, config, round)?);
    }
    Ok(out)
}

/// Reads the final polynomial coefficients.
pub fn read_final_poly(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<Vec<ExtFieldElement>> {
    decode_sequence(
        cursor,
        config.sizes().ext_field,
        config.fri().final_poly_len,
        Section::FriFinalPoly,
    )
}

/// Reads the proof-of-work witness.
pub fn read_pow_witness(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<FieldElement> {
    let bytes = cursor.take(config.sizes().field, Section::FriPowWitness)?;
    Ok(FieldElement::from_bytes(bytes))
}

/// Reads the complete FRI opening proof.
pub fn read_fri_proof(
    cursor: &mut ByteReader<'_>,
    config: &TranscriptConfig,
) -> DecodeResult<FriProof> {
    let commit_phase_merkle_caps = read_commit_phase_caps(cursor, config)?;
    tracing::trace!(offset = cursor.position(), "decoded commit phase caps");
    let query_round_proofs = read_query_rounds(cursor, config)?;
    tracing::trace!(
        offset = cursor.position(),
        rounds = query_round_proofs.len(),
        "decoded query rounds"
    );
    let final_poly = read_final_poly(cursor, config)?;
    let pow_witness = read_pow_witness(cursor, config)?;
    Ok(FriProof {
        commit_phase_merkle_caps,
        query_round_proofs,
        final_poly,
        pow_witness,
    })
}

fn write_query_leaf<T: Element>(
    out: &mut Vec<u8>,
    leaf: &QueryLeaf<T>,
    config: &TranscriptConfig,
    round: usize,
    group: LeafGroup,
) -> EncodeResult<()> {
    let sizes = config.sizes();
    let shape = config.fri().leaf(group);
    let section = |part| Section::FriQuery { round, group, part };

    write_sequence(
        out,
        &leaf.values,
        sizes.value_width(group),
        shape.values,
        section(LeafPart::Values),
    )?;
    write_length_prefix(out, leaf.merkle_proof.depth(), section(LeafPart::LengthPrefix))?;
    write_merkle_proof(
        out,
        &leaf.merkle_proof,
        sizes.hash,
        shape.proof_depth,
        section(LeafPart::Proof),
    )
}

/// Writes query round `round`.
pub fn write_query_round(
    out: &mut Vec<u8>,
    query: &FriQueryRound,
    config: &TranscriptConfig,
    round: usize,
) -> EncodeResult<()> {
    write_query_leaf(out, &query.constants_sigmas, config, round, LeafGroup::ConstantsSigmas)?;
    write_query_leaf(out, &query.wires, config, round, LeafGroup::Wires)?;
    write_query_leaf(out, &query.zs_partial, config, round, LeafGroup::ZsPartial)?;
    write_query_leaf(out, &query.quotient, config, round, LeafGroup::Quotient)?;
    write_query_leaf(out, &query.step0, config, round, LeafGroup::Step0)?;
    write_query_leaf(out, &query.step1, config, round, LeafGroup::Step1)
}

/// Writes the complete FRI opening proof.
pub fn write_fri_proof(
    out: &mut Vec<u8>,
    proof: &FriProof,
    config: &TranscriptConfig,
) -> EncodeResult<()> {
    let sizes = config.sizes();
    let fri = config.fri();

    let caps = &proof.commit_phase_merkle_caps.0;
    if caps.len() != fri.num_commit_rounds {
        return Err(EncodeError::RoundCount {
            phase: "fri_commit_phase_merkle_caps",
            expected: fri.num_commit_rounds,
            actual: caps.len(),
        });
    }
    for (round, cap) in caps.iter().enumerate() {
        let section = Section::FriCommitPhaseCaps { round };
        write_merkle_cap(out, cap, sizes.hash, fri.commit_cap_height, section)?;
    }

    let rounds = &proof.query_round_proofs;
    if rounds.len() != fri.num_query_rounds {
        return Err(EncodeError::RoundCount {
            phase: "fri_query_round",
            expected: fri.num_query_rounds,
            actual: rounds.len(),
        });
    }
    for (round, query) in rounds.iter().enumerate() {
        write_query_round(out, query, config, round)?;
    }

    write_sequence(
        out,
        &proof.final_poly,
        sizes.ext_field,
        fri.final_poly_len,
        Section::FriFinalPoly,
    )?;
    write_element(out, &proof.pow_witness, sizes.field, Section::FriPowWitness)
}
