//! Sequential big-endian reader over an immutable byte buffer.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{ReadKind, StaxieError};

/// Read offset into a borrowed buffer. Every read advances the offset by
/// the number of bytes consumed, or fails without advancing.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    fn take(&mut self, needed: usize, kind: ReadKind) -> Result<&'a [u8], StaxieError> {
        if needed > self.remaining() {
            return Err(StaxieError::OutOfBounds {
                kind,
                offset: self.offset,
                needed,
                len: self.data.len(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, StaxieError> {
        Ok(self.take(1, ReadKind::U8)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, StaxieError> {
        Ok(BigEndian::read_u16(self.take(2, ReadKind::U16)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, StaxieError> {
        Ok(BigEndian::read_u32(self.take(4, ReadKind::U32)?))
    }

    /// One length byte followed by that many bytes of text. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn read_string(&mut self) -> Result<String, StaxieError> {
        let len = self.take(1, ReadKind::StringLength)?[0] as usize;
        let bytes = self.take(len, ReadKind::String)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn read_tag(&mut self) -> Result<[u8; 4], StaxieError> {
        let bytes = self.take(4, ReadKind::Tag)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn skip(&mut self, count: usize) -> Result<(), StaxieError> {
        self.take(count, ReadKind::Skip).map(|_| ())
    }
}
