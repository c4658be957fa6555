//! Image collaborator seam.
//!
//! Pixel decoding and sub-region extraction live outside the decoder. Any
//! backend that can turn the asset bytes into an image and cut rectangles out
//! of it implements [`ImageSource`]. With the `render` feature a raylib
//! backed implementation is provided in [`crate::raylib_image`].

use serde::Serialize;

use crate::error::StaxieError;

/// Source rectangle of one slice, in pixels of the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SliceRect {
    /// Whether the rectangle lies entirely inside an image of the given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        right <= image_width as u64 && bottom <= image_height as u64
    }
}

pub trait ImageSource: Sized {
    /// Handle to an extracted sub-region, stored on each slice.
    type Region;

    /// Decode the base image found at the start of `bytes`. Failures map to
    /// [`StaxieError::ImageDecode`].
    fn decode(bytes: &[u8]) -> Result<Self, StaxieError>;

    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Cut `rect` out of the image. Callers only pass rectangles that fit
    /// within [`dimensions`](ImageSource::dimensions).
    fn extract(&self, rect: SliceRect) -> Result<Self::Region, StaxieError>;
}
