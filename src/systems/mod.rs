//! ECS systems.
//!
//! - [`animation`] – steps sprite stack cursors and spins sprite stacks
//! - [`render`] – draws sprite stacks with raylib (feature `render`)

pub mod animation;
#[cfg(feature = "render")]
pub mod render;
