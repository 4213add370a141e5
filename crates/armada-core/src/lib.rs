//! **armada-core** — foundational types for the armada tile world.
//!
//! This crate provides the types shared by every armada subsystem: the
//! [`Point`] tile coordinate, the [`GridSize`] world dimensions with
//! row-major flat-index addressing, and the isometric world↔screen
//! projection helpers in [`iso`].

pub mod geom;
pub mod grid;
pub mod iso;

pub use geom::Point;
pub use grid::{GridSize, WORLD_HEIGHT, WORLD_WIDTH};
