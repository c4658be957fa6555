//! Staxie sprite stack library.
//!
//! Decodes the `stAx` animation section embedded in a staxie PNG into an
//! immutable [`Sheet`](sheet::Sheet) catalog, and plays it back per instance
//! with an [`AnimationCursor`](playback::AnimationCursor). The ECS
//! components, resources and systems wire both into a `bevy_ecs` world; the
//! `render` feature adds raylib image decoding and drawing.

pub mod components;
pub mod error;
pub mod format;
pub mod image;
pub mod placement;
pub mod playback;
#[cfg(feature = "render")]
pub mod raylib_image;
pub mod resources;
pub mod sheet;
pub mod systems;

pub use error::StaxieError;
pub use format::{decode_layout, decode_sheet};
pub use playback::{AnimationCursor, Rebind};
pub use sheet::{Animation, Frame, Sheet, Slice, Stack};
