use super::cursor::ByteReader;
use super::error::{DecodeResult, EncodeError, EncodeResult, FormatMismatch, Section};
use crate::fri::LeafGroup;

/// Reads a one-byte Merkle proof length prefix and checks it against the
/// configured depth.
///
/// The prefix never drives the layout; a disagreement means the buffer and the
/// configuration describe different proofs.
pub fn read_length_prefix(
    cursor: &mut ByteReader<'_>,
    round: usize,
    group: LeafGroup,
    expected: usize,
    section: Section,
) -> DecodeResult<()> {
    let actual = cursor.take_u8(section)?;
    if usize::from(actual) != expected {
        tracing::warn!(round, %group, expected, actual, "query proof length prefix mismatch");
        return Err(FormatMismatch::LengthPrefix {
            round,
            group,
            expected,
            actual,
        }
        .into());
    }
    Ok(())
}

/// Writes a one-byte Merkle proof length prefix.
pub fn write_length_prefix(
    out: &mut Vec<u8>,
    depth: usize,
    section: Section,
) -> EncodeResult<()> {
    let byte = u8::try_from(depth).map_err(|_| EncodeError::PrefixOverflow { section, depth })?;
    out.push(byte);
    Ok(())
}

/// Ensures that the reader consumed all bytes, otherwise returns a trailing-bytes error.
pub fn ensure_consumed(cursor: &ByteReader<'_>) -> DecodeResult<()> {
    let remaining = cursor.remaining();
    if remaining == 0 {
        Ok(())
    } else {
        tracing::warn!(consumed = cursor.position(), remaining, "trailing transcript bytes");
        Err(FormatMismatch::TrailingBytes {
            consumed: cursor.position(),
            remaining,
        }
        .into())
    }
}
