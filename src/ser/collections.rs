use super::cursor::ByteReader;
use super::error::{DecodeResult, EncodeError, EncodeResult, Section};
use crate::field::Element;

/// Number of `item_size`-byte items worth reserving for a configured `count`.
///
/// Never exceeds what the unread bytes could hold, so a hostile count fails on
/// the cursor instead of in the allocator.
pub fn bounded_capacity(count: usize, remaining: usize, item_size: usize) -> usize {
    count.min(remaining / item_size.max(1))
}

/// Reads `count` consecutive `element_size`-byte elements.
///
/// The sequence carries no length prefix; `count` comes from the
/// configuration. Underflow is reported by the cursor at the element that
/// could not be read.
pub fn decode_sequence<T: Element>(
    cursor: &mut ByteReader<'_>,
    element_size: usize,
    count: usize,
    section: Section,
) -> DecodeResult<Vec<T>> {
    let mut out = Vec::with_capacity(bounded_capacity(count, cursor.remaining(), element_size));
    for _ in 0..count {
        out.push(T::from_bytes(cursor.take(element_size, section)?));
    }
    Ok(out)
}

/// Reads a `rows x cols` grid of elements in row-major order.
///
/// The whole grid must be available before any row is decoded; row
/// boundaries are implicit.
pub fn decode_grid<T: Element>(
    cursor: &mut ByteReader<'_>,
    element_size: usize,
    rows: usize,
    cols: usize,
    section: Section,
) -> DecodeResult<Vec<Vec<T>>> {
    let total = rows
        .checked_mul(cols)
        .and_then(|cells| cells.checked_mul(element_size))
        .unwrap_or(usize::MAX);
    cursor.require(total, section)?;
    (0..rows)
        .map(|_| decode_sequence(cursor, element_size, cols, section))
        .collect()
}

/// Appends a fixed-count sequence, checking count and element width.
pub fn write_sequence<T: Element>(
    out: &mut Vec<u8>,
    items: &[T],
    element_size: usize,
    expected_count: usize,
    section: Section,
) -> EncodeResult<()> {
    if items.len() != expected_count {
        return Err(EncodeError::ShapeMismatch {
            section,
            expected: expected_count,
            actual: items.len(),
        });
    }
    for item in items {
        write_element(out, item, element_size, section)?;
    }
    Ok(())
}

/// Appends a single element, checking its width.
pub fn write_element<T: Element>(
    out: &mut Vec<u8>,
    item: &T,
    element_size: usize,
    section: Section,
) -> EncodeResult<()> {
    let bytes = item.as_bytes();
    if bytes.len() != element_size {
        return Err(EncodeError::ElementWidth {
            section,
            expected: element_size,
            actual: bytes.len(),
        });
    }
    out.extend_from_slice(bytes);
    Ok(())
}
