//! Binary staxie decoding: byte cursor, chunk scanner and catalog decoder.

pub mod chunks;
pub mod cursor;
pub mod decoder;

pub use decoder::{SECTION_TAG, SUPPORTED_VERSION, decode_layout, decode_sheet};
