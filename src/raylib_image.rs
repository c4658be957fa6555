//! raylib backed image collaborator.
//!
//! Decoding and slicing happen on the CPU with [`Image`], so a sheet can be
//! decoded before a window exists. Uploading the slices to the GPU is a
//! separate step that needs the raylib thread.

use raylib::prelude::*;

use crate::error::StaxieError;
use crate::format::decode_sheet;
use crate::image::{ImageSource, SliceRect};
use crate::sheet::Sheet;

pub struct RaylibImage(Image);

impl ImageSource for RaylibImage {
    type Region = Image;

    fn decode(bytes: &[u8]) -> Result<Self, StaxieError> {
        Image::load_image_from_mem(".png", bytes)
            .map(RaylibImage)
            .map_err(|e| StaxieError::ImageDecode(e.to_string()))
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.0.width().max(0) as u32, self.0.height().max(0) as u32)
    }

    fn extract(&self, rect: SliceRect) -> Result<Image, StaxieError> {
        Ok(self.0.from_image(Rectangle {
            x: rect.x as f32,
            y: rect.y as f32,
            width: rect.width as f32,
            height: rect.height as f32,
        }))
    }
}

/// Decode a staxie asset and upload every slice as a texture.
pub fn load_sheet_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    bytes: &[u8],
) -> Result<Sheet<Texture2D>, String> {
    let sheet = decode_sheet::<RaylibImage>(bytes).map_err(|e| e.to_string())?;
    sheet.try_map_regions(|rect, image| {
        rl.load_texture_from_image(thread, &image).map_err(|e| {
            format!(
                "Failed to upload slice {}x{} at ({}, {}): {}",
                rect.width, rect.height, rect.x, rect.y, e
            )
        })
    })
}
