use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::spritestack::SpriteStack;
use crate::placement::{StackTransform, slice_placements};
use crate::resources::sheetstore::SheetStore;

/// Draw every sprite stack's current frame, bottom slice first, each slice
/// tinted by its shading.
pub fn render_sprite_stacks<D: RaylibDraw>(world: &mut World, d: &mut D) {
    let mut query = world.query::<(&SpriteStack, &MapPosition, Option<&Rotation>)>();
    let store = world.resource::<SheetStore<Texture2D>>();

    for (sprite, pos, rotation) in query.iter(world) {
        let Some(sheet) = store.get(&sprite.sheet_key) else {
            continue;
        };
        let slices = sprite.cursor.current_slices(sheet);
        let transform = StackTransform {
            x: pos.x,
            y: pos.y,
            scale: sprite.scale,
            rotation: rotation.map_or(0.0, |r| r.degrees),
        };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: sheet.frame_width as f32,
            height: sheet.frame_height as f32,
        };
        let placements =
            slice_placements(sheet.frame_width, sheet.frame_height, transform, slices.len());
        for (slice, p) in slices.iter().zip(placements) {
            let dest = Rectangle {
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
            };
            let origin = Vector2 {
                x: p.origin_x,
                y: p.origin_y,
            };
            let tint = slice.tint();
            d.draw_texture_pro(
                &slice.region,
                src,
                dest,
                origin,
                p.rotation,
                Color::new(tint, tint, tint, 255),
            );
        }
    }
}
