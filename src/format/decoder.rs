//! Staxie section decoding.
//!
//! Payload layout (all integers big-endian):
//!
//! ```text
//! version: u8 (must be 0)
//! frame_width: u16, frame_height: u16, stack_count: u16
//! stack_count x {
//!     name: u8 length + bytes, slice_count: u16, animation_count: u16
//!     animation_count x {
//!         name: u8 length + bytes, frame_time: u32, frame_count: u16
//!         frame_count x { slice_count x shading: u8 }
//!     }
//! }
//! ```
//!
//! Slice positions are not stored. Layer `l` of a frame sits at
//! `x = l * frame_width`; every frame with at least one slice occupies the
//! next `frame_height` rows of the image, counted across the whole section.

use log::{debug, info};

use super::chunks::ChunkScanner;
use super::cursor::ByteCursor;
use crate::error::StaxieError;
use crate::image::ImageSource;
use crate::sheet::{Animation, Frame, Sheet, Slice, Stack};

pub const SECTION_TAG: [u8; 4] = *b"stAx";
pub const SUPPORTED_VERSION: u8 = 0;

#[derive(Default)]
struct Layout {
    frame_width: u32,
    frame_height: u32,
    stacks: Vec<Stack>,
}

/// Decode the catalog structure only. Slice regions are `()`.
pub fn decode_layout(data: &[u8]) -> Result<Sheet, StaxieError> {
    let mut layout = Layout::default();
    let sections = ChunkScanner::new(data)?
        .for_each_section(SECTION_TAG, |cursor| decode_section(cursor, &mut layout))?;
    if sections == 0 {
        debug!("no {} section found", String::from_utf8_lossy(&SECTION_TAG));
    }
    let sheet = Sheet::new(layout.frame_width, layout.frame_height, layout.stacks);
    info!(
        "decoded staxie sheet: {} stacks, {}x{} frames",
        sheet.stacks.len(),
        sheet.frame_width,
        sheet.frame_height
    );
    Ok(sheet)
}

/// Decode the base image with `I`, decode the catalog, then extract the
/// region of every slice from the image.
pub fn decode_sheet<I: ImageSource>(data: &[u8]) -> Result<Sheet<I::Region>, StaxieError> {
    let image = I::decode(data)?;
    let (image_width, image_height) = image.dimensions();
    decode_layout(data)?.try_map_regions(|rect, ()| {
        if !rect.fits_within(image_width, image_height) {
            return Err(StaxieError::Region {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                reason: format!("outside {image_width}x{image_height} image"),
            });
        }
        image.extract(rect)
    })
}

fn decode_section(cursor: &mut ByteCursor<'_>, layout: &mut Layout) -> Result<(), StaxieError> {
    let version = cursor.read_u8()?;
    if version != SUPPORTED_VERSION {
        return Err(StaxieError::UnsupportedVersion { found: version });
    }
    let frame_width = cursor.read_u16()? as u32;
    let frame_height = cursor.read_u16()? as u32;
    let stack_count = cursor.read_u16()?;

    layout.frame_width = frame_width;
    layout.frame_height = frame_height;

    let mut y = 0u32;
    for _ in 0..stack_count {
        let stack = decode_stack(cursor, frame_width, frame_height, &mut y)?;
        layout.stacks.push(stack);
    }
    Ok(())
}

fn decode_stack(
    cursor: &mut ByteCursor<'_>,
    frame_width: u32,
    frame_height: u32,
    y: &mut u32,
) -> Result<Stack, StaxieError> {
    let name = cursor.read_string()?;
    let slice_count = cursor.read_u16()?;
    let animation_count = cursor.read_u16()?;
    debug!("stack {name:?}: {slice_count} slices, {animation_count} animations");

    let mut animations = Vec::with_capacity(animation_count as usize);
    for _ in 0..animation_count {
        let name = cursor.read_string()?;
        let frame_time = cursor.read_u32()?;
        let frame_count = cursor.read_u16()?;

        let mut frames = Vec::with_capacity(frame_count as usize);
        for _ in 0..frame_count {
            let mut slices = Vec::with_capacity(slice_count as usize);
            for layer in 0..slice_count as u32 {
                slices.push(Slice {
                    x: layer * frame_width,
                    y: *y,
                    shading: cursor.read_u8()? as f32 / 255.0,
                    region: (),
                });
            }
            if slice_count > 0 {
                *y = y.saturating_add(frame_height);
            }
            frames.push(Frame { slices });
        }
        animations.push(Animation {
            name,
            frame_time,
            frames,
        });
    }
    Ok(Stack::new(name, slice_count, animations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadKind;
    use crate::image::SliceRect;

    /// Hand-built staxie section payload.
    struct Section(Vec<u8>);

    impl Section {
        fn new(version: u8, width: u16, height: u16, stacks: u16) -> Self {
            let mut out = vec![version];
            out.extend_from_slice(&width.to_be_bytes());
            out.extend_from_slice(&height.to_be_bytes());
            out.extend_from_slice(&stacks.to_be_bytes());
            Section(out)
        }

        fn name(mut self, name: &str) -> Self {
            self.0.push(name.len() as u8);
            self.0.extend_from_slice(name.as_bytes());
            self
        }

        fn stack(self, name: &str, slices: u16, animations: u16) -> Self {
            let mut s = self.name(name);
            s.0.extend_from_slice(&slices.to_be_bytes());
            s.0.extend_from_slice(&animations.to_be_bytes());
            s
        }

        fn animation(self, name: &str, frame_time: u32, frames: u16) -> Self {
            let mut s = self.name(name);
            s.0.extend_from_slice(&frame_time.to_be_bytes());
            s.0.extend_from_slice(&frames.to_be_bytes());
            s
        }

        fn shades(mut self, shades: &[u8]) -> Self {
            self.0.extend_from_slice(shades);
            self
        }

        fn into_container(self) -> Vec<u8> {
            let mut out = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(b"IHDR");
            out.extend_from_slice(&[0; 4]);
            out.extend_from_slice(&(self.0.len() as u32).to_be_bytes());
            out.extend_from_slice(&SECTION_TAG);
            out.extend_from_slice(&self.0);
            out.extend_from_slice(&[0; 4]);
            out
        }
    }

    #[test]
    fn decodes_header_and_counts() {
        let data = Section::new(0, 16, 24, 1)
            .stack("top", 2, 1)
            .animation("attack", 100, 2)
            .shades(&[0, 255, 51, 102])
            .into_container();
        let sheet = decode_layout(&data).unwrap();
        assert_eq!(sheet.frame_width, 16);
        assert_eq!(sheet.frame_height, 24);
        assert_eq!(sheet.stacks.len(), 1);
        let stack = &sheet.stacks[0];
        assert_eq!(stack.name, "top");
        assert_eq!(stack.slice_count, 2);
        let anim = stack.animation("attack").unwrap();
        assert_eq!(anim.frame_time, 100);
        assert_eq!(anim.frames.len(), 2);
        assert!(anim.frames.iter().all(|f| f.slices.len() == 2));
    }

    #[test]
    fn slice_positions_follow_layer_and_running_row() {
        let data = Section::new(0, 8, 10, 1)
            .stack("top", 3, 2)
            .animation("idle", 50, 1)
            .shades(&[1, 2, 3])
            .animation("walk", 50, 2)
            .shades(&[4, 5, 6, 7, 8, 9])
            .into_container();
        let sheet = decode_layout(&data).unwrap();
        let stack = &sheet.stacks[0];
        let idle = &stack.animations[0].frames[0].slices;
        assert_eq!(
            idle.iter().map(|s| (s.x, s.y)).collect::<Vec<_>>(),
            vec![(0, 0), (8, 0), (16, 0)]
        );
        let walk = &stack.animations[1].frames;
        assert!(walk[0].slices.iter().all(|s| s.y == 10));
        assert!(walk[1].slices.iter().all(|s| s.y == 20));
        assert_eq!(walk[1].slices[2].x, 16);
    }

    #[test]
    fn row_counter_runs_across_stacks() {
        let data = Section::new(0, 4, 4, 2)
            .stack("top", 1, 1)
            .animation("a", 10, 2)
            .shades(&[0, 0])
            .stack("side", 1, 1)
            .animation("a", 10, 1)
            .shades(&[0])
            .into_container();
        let sheet = decode_layout(&data).unwrap();
        assert_eq!(sheet.stacks[1].animations[0].frames[0].slices[0].y, 8);
    }

    #[test]
    fn zero_slice_stack_does_not_advance_rows() {
        let data = Section::new(0, 4, 4, 2)
            .stack("empty", 0, 1)
            .animation("still", 10, 3)
            .stack("top", 1, 1)
            .animation("a", 10, 1)
            .shades(&[9])
            .into_container();
        let sheet = decode_layout(&data).unwrap();
        let empty = &sheet.stacks[0].animations[0];
        assert_eq!(empty.frames.len(), 3);
        assert!(empty.frames.iter().all(|f| f.slices.is_empty()));
        assert_eq!(sheet.stacks[1].animations[0].frames[0].slices[0].y, 0);
    }

    #[test]
    fn shading_is_byte_over_255() {
        let shades: Vec<u8> = (0..=255).collect();
        let data = Section::new(0, 1, 1, 1)
            .stack("s", 256, 1)
            .animation("a", 1, 1)
            .shades(&shades)
            .into_container();
        let sheet = decode_layout(&data).unwrap();
        let slices = &sheet.stacks[0].animations[0].frames[0].slices;
        for (byte, slice) in shades.iter().zip(slices) {
            assert_eq!(slice.shading, *byte as f32 / 255.0);
        }
        assert_eq!(slices[0].shading, 0.0);
        assert_eq!(slices[255].shading, 1.0);
    }

    #[test]
    fn rejects_unknown_version() {
        let data = Section::new(1, 8, 8, 0).into_container();
        assert_eq!(
            decode_layout(&data).unwrap_err(),
            StaxieError::UnsupportedVersion { found: 1 }
        );
    }

    #[test]
    fn truncated_frames_abort_decode() {
        let data = Section::new(0, 8, 8, 1)
            .stack("top", 4, 1)
            .animation("a", 10, 1)
            .shades(&[1, 2])
            .0;
        let mut container = vec![0u8; 8];
        container.extend_from_slice(&(data.len() as u32).to_be_bytes());
        container.extend_from_slice(&SECTION_TAG);
        container.extend_from_slice(&data);
        let err = decode_layout(&container).unwrap_err();
        assert!(matches!(
            err,
            StaxieError::OutOfBounds {
                kind: ReadKind::U8,
                ..
            }
        ));
    }

    #[test]
    fn no_section_yields_empty_sheet() {
        let sheet = decode_layout(&[0u8; 8]).unwrap();
        assert_eq!(sheet.frame_width, 0);
        assert!(sheet.stacks.is_empty());
    }

    struct FakeImage {
        width: u32,
        height: u32,
    }

    impl ImageSource for FakeImage {
        type Region = SliceRect;

        fn decode(bytes: &[u8]) -> Result<Self, StaxieError> {
            if bytes.len() < 8 || bytes[1..4] != *b"PNG" {
                return Err(StaxieError::ImageDecode("not a png".to_string()));
            }
            Ok(FakeImage {
                width: 16,
                height: 16,
            })
        }

        fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn extract(&self, rect: SliceRect) -> Result<SliceRect, StaxieError> {
            Ok(rect)
        }
    }

    #[test]
    fn decode_sheet_extracts_every_slice() {
        let data = Section::new(0, 8, 8, 1)
            .stack("top", 2, 1)
            .animation("a", 10, 2)
            .shades(&[0, 0, 0, 0])
            .into_container();
        let sheet = decode_sheet::<FakeImage>(&data).unwrap();
        let frames = &sheet.stacks[0].animations[0].frames;
        assert_eq!(
            frames[1].slices[1].region,
            SliceRect {
                x: 8,
                y: 8,
                width: 8,
                height: 8
            }
        );
    }

    #[test]
    fn decode_sheet_rejects_slices_outside_image() {
        let data = Section::new(0, 8, 8, 1)
            .stack("top", 3, 1)
            .animation("a", 10, 1)
            .shades(&[0, 0, 0])
            .into_container();
        let err = decode_sheet::<FakeImage>(&data).unwrap_err();
        assert!(matches!(err, StaxieError::Region { x: 16, .. }));
    }

    #[test]
    fn decode_sheet_propagates_image_failure() {
        let err = decode_sheet::<FakeImage>(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, StaxieError::ImageDecode(_)));
    }
}
