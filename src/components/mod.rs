//! ECS components for sprite stack entities.
//!
//! - [`mapposition`] – screen position of the stack's centre
//! - [`rotation`] – rotation angle in degrees
//! - [`spritestack`] – sheet key, playback cursor, rate and scale

pub mod mapposition;
pub mod rotation;
pub mod spritestack;
