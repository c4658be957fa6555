//! ECS resources made available to systems.
//!
//! - `sheetstore` – decoded sheets shared by all sprite stacks
//! - `stackconfig` – playback and viewer settings loaded from INI
pub mod sheetstore;
pub mod stackconfig;
