use super::error::{DecodeError, DecodeResult, Section};

/// Forward-only cursor over a transcript buffer.
///
/// Every read names the [`Section`] it serves so underflows can be reported
/// with the region and offset that failed. The cursor never rewinds; a failed
/// read leaves the offset where it was and the caller is expected to abandon
/// the whole decode.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current offset within the slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Returns the total length of the wrapped buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the wrapped buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Ensures at least `len` bytes can still be taken.
    pub fn require(&self, len: usize, section: Section) -> DecodeResult<()> {
        if len > self.remaining() {
            return Err(DecodeError::out_of_bounds(
                section,
                self.offset,
                len,
                self.remaining(),
            ));
        }
        Ok(())
    }

    /// Returns the next `len` bytes and advances past them.
    pub fn take(&mut self, len: usize, section: Section) -> DecodeResult<&'a [u8]> {
        self.require(len, section)?;
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Returns the next byte without advancing.
    pub fn peek_u8(&self, section: Section) -> DecodeResult<u8> {
        self.require(1, section)?;
        Ok(self.bytes[self.offset])
    }

    /// Returns the next byte and advances past it.
    pub fn take_u8(&mut self, section: Section) -> DecodeResult<u8> {
        let byte = self.peek_u8(section)?;
        self.offset += 1;
        Ok(byte)
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteReader::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_advances_and_reports_underflow() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteReader::new(&data);
        assert_eq!(cursor.take(2, Section::WiresCap).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 3);

        let err = cursor.take(4, Section::WiresCap).unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfBounds {
                section: Section::WiresCap,
                offset: 2,
                requested: 4,
                remaining: 3,
            }
        );
        assert_eq!(cursor.position(), 2, "failed reads must not advance");
    }

    #[test]
    fn peek_does_not_advance() {
        let data = [7u8, 9];
        let mut cursor = ByteReader::new(&data);
        assert_eq!(cursor.peek_u8(Section::PublicInputs).unwrap(), 7);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.take_u8(Section::PublicInputs).unwrap(), 7);
        assert_eq!(cursor.take_u8(Section::PublicInputs).unwrap(), 9);
        assert!(cursor.peek_u8(Section::PublicInputs).is_err());
    }

    #[test]
    fn zero_length_take_on_empty_buffer() {
        let mut cursor = ByteReader::new(&[]);
        assert!(cursor.is_empty());
        assert_eq!(cursor.take(0, Section::PublicInputs).unwrap(), &[] as &[u8]);
        assert_eq!(cursor.remaining(), 0);
    }
}
