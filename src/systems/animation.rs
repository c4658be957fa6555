//! Sprite stack playback systems.
//!
//! - [`sprite_stack_animation`] steps every [`SpriteStack`] cursor once per
//!   run by the instance's `frame_rate`.
//! - [`spin_sprite_stacks`] turns every sprite stack by the configured
//!   rotation speed, which is how the viewer shows off the stacking effect.
//!
//! # Related
//!
//! - [`crate::playback::AnimationCursor`] – the stepping rules
//! - [`crate::resources::sheetstore::SheetStore`] – sheets looked up by key

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::rotation::Rotation;
use crate::components::spritestack::SpriteStack;
use crate::resources::sheetstore::SheetStore;
use crate::resources::stackconfig::StackConfig;

/// Advance animation playback of every sprite stack.
///
/// Entities whose sheet key is not in the store are left alone.
pub fn sprite_stack_animation<R: Send + Sync + 'static>(
    mut query: Query<&mut SpriteStack>,
    store: Res<SheetStore<R>>,
) {
    for mut sprite in query.iter_mut() {
        let Some(sheet) = store.get(&sprite.sheet_key) else {
            trace!("sheet {:?} not in store", sprite.sheet_key);
            continue;
        };
        let rate = sprite.frame_rate;
        sprite.cursor.step(sheet, rate);
    }
}

/// Rotate sprite stacks by [`StackConfig::rotation_speed`] degrees.
pub fn spin_sprite_stacks(
    mut query: Query<&mut Rotation, With<SpriteStack>>,
    config: Res<StackConfig>,
) {
    for mut rotation in query.iter_mut() {
        rotation.turn(config.rotation_speed);
    }
}
