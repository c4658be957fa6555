//! Decode errors.
//!
//! Every failure here is fatal for the decode call that produced it: no
//! partially populated [`Sheet`](crate::sheet::Sheet) is ever returned.

use std::fmt;

use thiserror::Error;

/// The kind of read that ran past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    U8,
    U16,
    U32,
    StringLength,
    String,
    Tag,
    Skip,
}

impl fmt::Display for ReadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadKind::U8 => "u8",
            ReadKind::U16 => "u16",
            ReadKind::U32 => "u32",
            ReadKind::StringLength => "string length",
            ReadKind::String => "string",
            ReadKind::Tag => "tag",
            ReadKind::Skip => "skip",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StaxieError {
    #[error("out of bounds ({kind}): needed {needed} bytes at offset {offset}, buffer is {len}")]
    OutOfBounds {
        kind: ReadKind,
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("unsupported staxie version {found}")]
    UnsupportedVersion { found: u8 },

    #[error("image decode failed: {0}")]
    ImageDecode(String),

    #[error("slice region {width}x{height} at ({x}, {y}) could not be extracted: {reason}")]
    Region {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        reason: String,
    },
}
