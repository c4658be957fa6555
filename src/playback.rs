//! Per-instance playback state over an immutable [`Sheet`].
//!
//! An [`AnimationCursor`] holds indices into the sheet rather than
//! references, so it can live in an ECS component while the sheet sits in a
//! shared store. Every operation takes the sheet it was bound against.
//!
//! # Lookup misses
//!
//! Binding a stack or animation that does not exist is a silent no-op. The
//! returned [`Rebind`] tells the caller what happened, but ignoring it is
//! always fine.
//!
//! # States
//!
//! - no stack: nothing bound, `step` does nothing, no slices
//! - stack without animation: reached when switching to a stack that lacks
//!   the previously active animation name; `step` does nothing, no slices
//! - stack and animation: `step` advances frames, slices of the current frame
//!   are returned

use crate::sheet::{Animation, Sheet, Slice, Stack};

/// Outcome of a bind operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rebind {
    /// The name was found and is now selected.
    Bound,
    /// The name was not found; the cursor is unchanged.
    NotFound,
    /// An animation was requested before any stack was bound.
    NoStack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationCursor {
    stack: Option<usize>,
    animation: Option<usize>,
    frame: usize,
    elapsed: u32,
}

impl AnimationCursor {
    /// Bind `stack_name`, then `animation_name` within it.
    pub fn new<R>(sheet: &Sheet<R>, stack_name: &str, animation_name: &str) -> Self {
        let mut cursor = Self::default();
        cursor.bind_stack(sheet, stack_name);
        cursor.bind_animation(sheet, animation_name);
        cursor
    }

    /// Switch to the first stack named `name`, keeping the active animation
    /// name if the new stack has one with the same name. If it does not, the
    /// cursor ends up with a stack but no animation.
    pub fn bind_stack<R>(&mut self, sheet: &Sheet<R>, name: &str) -> Rebind {
        let Some(position) = sheet.stack_position(name) else {
            return Rebind::NotFound;
        };
        let previous = self.animation(sheet).map(|a| a.name.clone());
        self.stack = Some(position);
        self.animation = None;
        if let Some(previous) = previous {
            self.bind_animation(sheet, &previous);
        }
        Rebind::Bound
    }

    /// Switch to the first animation named `name` in the current stack.
    ///
    /// The elapsed time is seeded with the animation's `frame_time` so the
    /// next [`step`](Self::step) advances immediately. The frame index is
    /// kept if the new animation has that many frames, otherwise reset to 0.
    pub fn bind_animation<R>(&mut self, sheet: &Sheet<R>, name: &str) -> Rebind {
        let Some(stack) = self.stack(sheet) else {
            return Rebind::NoStack;
        };
        let Some(position) = stack.animation_position(name) else {
            return Rebind::NotFound;
        };
        self.animation = Some(position);
        self.elapsed = stack.animations[position].frame_time;
        self.select_frame(sheet, self.frame);
        Rebind::Bound
    }

    /// Jump to `index`. Out of range indices wrap to the first frame.
    pub fn select_frame<R>(&mut self, sheet: &Sheet<R>, index: usize) {
        let Some(animation) = self.animation(sheet) else {
            return;
        };
        self.frame = if index >= animation.frames.len() { 0 } else { index };
    }

    /// Accumulate `rate` time units. Once the accumulator reaches the frame
    /// time, move to the next frame (looping) and clear the accumulator.
    ///
    /// At most one frame is advanced per call. Returns whether it advanced.
    pub fn step<R>(&mut self, sheet: &Sheet<R>, rate: u32) -> bool {
        let Some(animation) = self.animation(sheet) else {
            return false;
        };
        let frame_time = animation.frame_time;
        let frame_count = animation.frames.len();

        self.elapsed = self.elapsed.saturating_add(rate);
        if self.elapsed < frame_time {
            return false;
        }
        self.elapsed = 0;
        self.frame += 1;
        if self.frame >= frame_count {
            self.frame = 0;
        }
        true
    }

    /// Slices of the current frame, or nothing if no frame is bound.
    pub fn current_slices<'s, R>(&self, sheet: &'s Sheet<R>) -> &'s [Slice<R>] {
        self.animation(sheet)
            .and_then(|a| a.frames.get(self.frame))
            .map(|f| f.slices.as_slice())
            .unwrap_or(&[])
    }

    pub fn stack<'s, R>(&self, sheet: &'s Sheet<R>) -> Option<&'s Stack<R>> {
        self.stack.and_then(|i| sheet.stacks.get(i))
    }

    pub fn animation<'s, R>(&self, sheet: &'s Sheet<R>) -> Option<&'s Animation<R>> {
        let stack = self.stack(sheet)?;
        self.animation.and_then(|i| stack.animations.get(i))
    }

    pub fn stack_name<'s, R>(&self, sheet: &'s Sheet<R>) -> Option<&'s str> {
        self.stack(sheet).map(|s| s.name.as_str())
    }

    pub fn animation_name<'s, R>(&self, sheet: &'s Sheet<R>) -> Option<&'s str> {
        self.animation(sheet).map(|a| a.name.as_str())
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}
