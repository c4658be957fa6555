//! Where each slice of a sprite stack is drawn.
//!
//! Slices are drawn centred on the instance position, scaled and rotated
//! around their centre, and each successive slice is lifted by `scale` units
//! so the layers read as a solid object seen from above.

/// Instance transform applied to every slice of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Degrees, clockwise.
    pub rotation: f32,
}

impl Default for StackTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// Destination of one slice, in the shape raylib's `draw_texture_pro`
/// expects: the destination rectangle's top-left is the pivot, `origin` is
/// the pivot offset inside the scaled slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub rotation: f32,
}

/// Placements for `count` slices, bottom layer first.
pub fn slice_placements(
    frame_width: u32,
    frame_height: u32,
    transform: StackTransform,
    count: usize,
) -> impl Iterator<Item = Placement> {
    let width = frame_width as f32 * transform.scale;
    let height = frame_height as f32 * transform.scale;
    (0..count).map(move |layer| Placement {
        x: transform.x,
        y: transform.y - layer as f32 * transform.scale,
        width,
        height,
        origin_x: width / 2.0,
        origin_y: height / 2.0,
        rotation: transform.rotation,
    })
}
