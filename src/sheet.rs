//! Decoded animation catalog.
//!
//! A [`Sheet`] owns every [`Stack`], [`Animation`], [`Frame`] and [`Slice`]
//! decoded from one staxie asset. It is immutable after construction and is
//! shared read-only between any number of
//! [`AnimationCursor`](crate::playback::AnimationCursor)s.
//!
//! The type parameter `R` is the region handle produced by the image
//! collaborator for each slice. A layout-only decode uses `()`.

use std::convert::Infallible;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::image::SliceRect;

/// Root of the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Sheet<R = ()> {
    pub frame_width: u32,
    pub frame_height: u32,
    pub stacks: Vec<Stack<R>>,
    #[serde(skip)]
    stack_index: FxHashMap<String, usize>,
}

impl<R> Sheet<R> {
    pub fn new(frame_width: u32, frame_height: u32, stacks: Vec<Stack<R>>) -> Self {
        let stack_index = index_by_name(stacks.iter().map(|s| s.name.as_str()));
        Self {
            frame_width,
            frame_height,
            stacks,
            stack_index,
        }
    }

    /// Index of the first stack declared with `name`.
    pub fn stack_position(&self, name: &str) -> Option<usize> {
        self.stack_index.get(name).copied()
    }

    pub fn stack(&self, name: &str) -> Option<&Stack<R>> {
        self.stack_position(name).map(|i| &self.stacks[i])
    }

    pub fn has_stack(&self, name: &str) -> bool {
        self.stack_index.contains_key(name)
    }

    /// Source rectangle of `slice` in the base image.
    pub fn slice_rect<T>(&self, slice: &Slice<T>) -> SliceRect {
        SliceRect {
            x: slice.x,
            y: slice.y,
            width: self.frame_width,
            height: self.frame_height,
        }
    }

    /// Rebuild the sheet with new region handles, keeping every stack,
    /// animation, frame and slice in place. Stops at the first error.
    pub fn try_map_regions<T, E, F>(self, mut f: F) -> Result<Sheet<T>, E>
    where
        F: FnMut(SliceRect, R) -> Result<T, E>,
    {
        let (width, height) = (self.frame_width, self.frame_height);
        let mut stacks = Vec::with_capacity(self.stacks.len());
        for stack in self.stacks {
            let mut animations = Vec::with_capacity(stack.animations.len());
            for animation in stack.animations {
                let mut frames = Vec::with_capacity(animation.frames.len());
                for frame in animation.frames {
                    let mut slices = Vec::with_capacity(frame.slices.len());
                    for slice in frame.slices {
                        let rect = SliceRect {
                            x: slice.x,
                            y: slice.y,
                            width,
                            height,
                        };
                        slices.push(Slice {
                            x: slice.x,
                            y: slice.y,
                            shading: slice.shading,
                            region: f(rect, slice.region)?,
                        });
                    }
                    frames.push(Frame { slices });
                }
                animations.push(Animation {
                    name: animation.name,
                    frame_time: animation.frame_time,
                    frames,
                });
            }
            stacks.push(Stack {
                name: stack.name,
                slice_count: stack.slice_count,
                animations,
                animation_index: stack.animation_index,
            });
        }
        Ok(Sheet {
            frame_width: width,
            frame_height: height,
            stacks,
            stack_index: self.stack_index,
        })
    }

    pub fn map_regions<T, F>(self, mut f: F) -> Sheet<T>
    where
        F: FnMut(SliceRect, R) -> T,
    {
        match self.try_map_regions(|rect, region| Ok::<T, Infallible>(f(rect, region))) {
            Ok(sheet) => sheet,
            Err(never) => match never {},
        }
    }
}

/// One orientation or variant of an entity, e.g. `"top"`.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Stack<R = ()> {
    pub name: String,
    /// Number of stacked layers in every frame of this stack.
    pub slice_count: u16,
    pub animations: Vec<Animation<R>>,
    #[serde(skip)]
    animation_index: FxHashMap<String, usize>,
}

impl<R> Stack<R> {
    pub fn new(name: impl Into<String>, slice_count: u16, animations: Vec<Animation<R>>) -> Self {
        let animation_index = index_by_name(animations.iter().map(|a| a.name.as_str()));
        Self {
            name: name.into(),
            slice_count,
            animations,
            animation_index,
        }
    }

    pub fn animation_position(&self, name: &str) -> Option<usize> {
        self.animation_index.get(name).copied()
    }

    pub fn animation(&self, name: &str) -> Option<&Animation<R>> {
        self.animation_position(name).map(|i| &self.animations[i])
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animation_index.contains_key(name)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Animation<R = ()> {
    pub name: String,
    /// Time a frame stays on screen, in playback step units.
    pub frame_time: u32,
    pub frames: Vec<Frame<R>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Frame<R = ()> {
    pub slices: Vec<Slice<R>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Slice<R = ()> {
    pub x: u32,
    pub y: u32,
    /// Brightness in `[0.0, 1.0]`.
    pub shading: f32,
    #[serde(skip)]
    pub region: R,
}

impl<R> Slice<R> {
    /// Shading as a grey channel value for tinting.
    pub fn tint(&self) -> u8 {
        (self.shading.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// First declaration of a name wins.
fn index_by_name<'a>(names: impl Iterator<Item = &'a str>) -> FxHashMap<String, usize> {
    let mut index = FxHashMap::default();
    for (i, name) in names.enumerate() {
        index.entry(name.to_string()).or_insert(i);
    }
    index
}
