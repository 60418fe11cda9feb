use super::types::{Digest, MerkleCap, MerkleProof};
use crate::ser::{
    decode_sequence, write_sequence, ByteReader, DecodeResult, EncodeResult, Section,
};

/// Reads a cap of `height` digests.
pub fn read_merkle_cap(
    cursor: &mut ByteReader<'_>,
    hash_size: usize,
    height: usize,
    section: Section,
) -> DecodeResult<MerkleCap> {
    decode_sequence::<Digest>(cursor, hash_size, height, section).map(MerkleCap)
}

/// Writes a cap, checking it holds exactly `height` digests.
pub fn write_merkle_cap(
    out: &mut Vec<u8>,
    cap: &MerkleCap,
    hash_size: usize,
    height: usize,
    section: Section,
) -> EncodeResult<()> {
    write_sequence(out, &cap.0, hash_size, height, section)
}

/// Reads the sibling digests of an authentication path whose depth is already known.
pub fn read_merkle_proof(
    cursor: &mut ByteReader<'_>,
    hash_size: usize,
    depth: usize,
    section: Section,
) -> DecodeResult<MerkleProof> {
    let siblings = decode_sequence::<Digest>(cursor, hash_size, depth, section)?;
    Ok(MerkleProof { siblings })
}

/// Writes the sibling digests of an authentication path.
pub fn write_merkle_proof(
    out: &mut Vec<u8>,
    proof: &MerkleProof,
    hash_size: usize,
    depth: usize,
    section: Section,
) -> EncodeResult<()> {
    write_sequence(out, &proof.siblings, hash_size, depth, section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Element;
    use crate::ser::DecodeError;

    #[test]
    fn cap_reads_height_digests() {
        let bytes: Vec<u8> = (0u8..12).collect();
        let mut cursor = ByteReader::new(&bytes);
        let cap = read_merkle_cap(&mut cursor, 4, 3, Section::WiresCap).expect("cap");
        assert_eq!(cap.len(), 3);
        assert_eq!(cap.0[2].as_bytes(), &[8, 9, 10, 11]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn short_cap_reports_section() {
        let bytes = [0u8; 7];
        let mut cursor = ByteReader::new(&bytes);
        let err = read_merkle_cap(&mut cursor, 4, 2, Section::QuotientPolysCap).unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfBounds {
                section: Section::QuotientPolysCap,
                offset: 4,
                requested: 4,
                remaining: 3,
            }
        );
    }

    #[test]
    fn cap_writer_rejects_wrong_height() {
        let cap = MerkleCap(vec![Digest::zero(4)]);
        let mut out = Vec::new();
        assert!(write_merkle_cap(&mut out, &cap, 4, 2, Section::WiresCap).is_err());
        write_merkle_cap(&mut out, &cap, 4, 1, Section::WiresCap).expect("write");
        assert_eq!(out, vec![0u8; 4]);
    }
}
