//! Sprite stack component.
//!
//! Binds one entity to a sheet in the [`SheetStore`](crate::resources::sheetstore::SheetStore)
//! by key, and carries the entity's own [`AnimationCursor`]. The
//! [`sprite_stack_animation`](crate::systems::animation::sprite_stack_animation)
//! system steps the cursor; the renderer reads its current slices.

use bevy_ecs::prelude::Component;

use crate::playback::AnimationCursor;
use crate::resources::stackconfig::DEFAULT_TICKS_PER_SECOND;
use crate::sheet::Sheet;

#[derive(Component, Debug, Clone)]
pub struct SpriteStack {
    pub sheet_key: String,
    pub cursor: AnimationCursor,
    /// Time units added to the cursor on every update.
    pub frame_rate: u32,
    pub scale: f32,
}

impl SpriteStack {
    /// Bind a new instance to `stack` and `animation` of `sheet`, stored under
    /// `sheet_key`. Plays at `1000 / 60` units per update until told otherwise.
    pub fn new<R>(
        sheet_key: impl Into<String>,
        sheet: &Sheet<R>,
        stack: &str,
        animation: &str,
    ) -> Self {
        Self {
            sheet_key: sheet_key.into(),
            cursor: AnimationCursor::new(sheet, stack, animation),
            frame_rate: 1000 / DEFAULT_TICKS_PER_SECOND,
            scale: 1.0,
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}
