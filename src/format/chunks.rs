//! Length-tagged chunk iteration.
//!
//! Chunks follow the container signature in buffer order, each laid out as
//! `size: u32`, `tag: [u8; 4]`, payload, `crc: u32`. Recognised chunks are
//! handed to a section decoder which consumes its own payload; all other
//! payloads are skipped by their declared size. The trailing checksum is
//! read and discarded either way.

use log::debug;

use super::cursor::ByteCursor;
use crate::error::StaxieError;

/// Length of the container's leading signature (the PNG magic).
pub const SIGNATURE_LEN: usize = 8;

pub struct ChunkScanner<'a> {
    cursor: ByteCursor<'a>,
}

impl<'a> ChunkScanner<'a> {
    /// Position a scanner just past the container signature.
    pub fn new(data: &'a [u8]) -> Result<Self, StaxieError> {
        Self::with_skip(data, SIGNATURE_LEN)
    }

    pub fn with_skip(data: &'a [u8], skip: usize) -> Result<Self, StaxieError> {
        let mut cursor = ByteCursor::new(data);
        cursor.skip(skip)?;
        Ok(Self { cursor })
    }

    /// Walk every chunk until the buffer end, calling `decode` with the
    /// cursor positioned at the payload of each chunk tagged `tag`.
    ///
    /// The section decoder is trusted to consume exactly its payload; the
    /// declared size of a recognised chunk is not checked against it.
    pub fn for_each_section<F>(mut self, tag: [u8; 4], mut decode: F) -> Result<usize, StaxieError>
    where
        F: FnMut(&mut ByteCursor<'a>) -> Result<(), StaxieError>,
    {
        let mut sections = 0;
        while !self.cursor.is_at_end() {
            let start = self.cursor.offset();
            let size = self.cursor.read_u32()?;
            let chunk_tag = self.cursor.read_tag()?;
            if chunk_tag == tag {
                debug!(
                    "decoding chunk {} ({} bytes) at offset {}",
                    String::from_utf8_lossy(&chunk_tag),
                    size,
                    start
                );
                decode(&mut self.cursor)?;
                sections += 1;
            } else {
                debug!(
                    "skipping chunk {} ({} bytes) at offset {}",
                    String::from_utf8_lossy(&chunk_tag),
                    size,
                    start
                );
                self.cursor.skip(size as usize)?;
            }
            self.cursor.read_u32()?;
        }
        Ok(sections)
    }
}
