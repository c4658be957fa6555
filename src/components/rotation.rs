use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    /// Add `delta` degrees, keeping the angle in `[0, 360)`.
    pub fn turn(&mut self, delta: f32) {
        self.degrees = (self.degrees + delta).rem_euclid(360.0);
    }
}
