//! Obstacle classification of the tile world.
//!
//! The world-state layer owns tile classification and hands the engine a
//! read-only snapshot before each search. The convention throughout this
//! crate is **`true` means passable**; anything a ship cannot enter (land,
//! reefs, harbors under construction) reads as `false`.

use armada_core::{GridSize, Point};
use thiserror::Error;

/// Raw classification code for open water, the only passable class.
///
/// Snapshots that still carry raw per-tile codes map to the boolean
/// convention via [`SeaChart::from_classes`]: code `0` is passable, every
/// other code is blocked.
pub const CLASS_OPEN_WATER: u8 = 0;

/// Read-only per-tile passability, the seam between the navigation engine
/// and the world state.
pub trait Chart {
    /// Whether a ship can enter the tile at `p`.
    ///
    /// Out-of-bounds positions must read as blocked.
    fn is_passable(&self, p: Point) -> bool;
}

/// Any `Fn(Point) -> bool` predicate is a chart.
impl<F: Fn(Point) -> bool> Chart for F {
    fn is_passable(&self, p: Point) -> bool {
        self(p)
    }
}

/// Error building a [`SeaChart`] from a classification snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The snapshot does not cover the grid tile-for-tile.
    #[error("classification has {got} entries, expected {expected} for a {width}x{height} grid")]
    LengthMismatch {
        got: usize,
        expected: usize,
        width: i32,
        height: i32,
    },
}

/// A flat, row-major passability chart covering the whole grid.
///
/// Backed by one `bool` per tile, indexed by flat index
/// (`y * width + x`). Construction is length-checked, so a `SeaChart`
/// always covers its grid exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaChart {
    size: GridSize,
    passable: Vec<bool>,
}

impl SeaChart {
    /// An all-passable chart: open water everywhere.
    pub fn open(size: GridSize) -> Self {
        Self {
            size,
            passable: vec![true; size.len()],
        }
    }

    /// Build a chart from per-tile passability flags, row-major.
    ///
    /// # Errors
    ///
    /// [`ChartError::LengthMismatch`] if `passable` does not hold exactly
    /// `width * height` entries.
    pub fn from_passable(size: GridSize, passable: Vec<bool>) -> Result<Self, ChartError> {
        if passable.len() != size.len() {
            return Err(ChartError::LengthMismatch {
                got: passable.len(),
                expected: size.len(),
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { size, passable })
    }

    /// Build a chart from raw classification codes, row-major.
    ///
    /// [`CLASS_OPEN_WATER`] maps to passable; every other code to blocked.
    ///
    /// # Errors
    ///
    /// [`ChartError::LengthMismatch`] if `classes` does not hold exactly
    /// `width * height` entries.
    pub fn from_classes(size: GridSize, classes: &[u8]) -> Result<Self, ChartError> {
        let passable = classes.iter().map(|&c| c == CLASS_OPEN_WATER).collect();
        Self::from_passable(size, passable)
    }

    /// The grid this chart covers.
    #[inline]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Update one tile. Out-of-bounds positions are ignored.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        if self.size.contains(p) {
            let idx = self.size.flat_index(p);
            self.passable[idx] = passable;
        }
    }
}

impl Chart for SeaChart {
    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        self.size.contains(p) && self.passable[self.size.flat_index(p)]
    }
}
