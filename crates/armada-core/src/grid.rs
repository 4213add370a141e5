//! World dimensions and row-major flat-index addressing.

use crate::geom::Point;

/// Width of the canonical world grid, in tiles.
pub const WORLD_WIDTH: i32 = 300;
/// Height of the canonical world grid, in tiles.
pub const WORLD_HEIGHT: i32 = 300;

/// Dimensions of a rectangular tile grid.
///
/// Tiles are addressed by integer coordinates `(x, y)` with
/// `0 <= x < width` and `0 <= y < height`. The **flat index**
/// `y * width + x` is the canonical key for all per-tile bookkeeping; every
/// flat table over a grid of this size must be indexed this way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    /// Create grid dimensions. Both sides must be positive to be useful;
    /// degenerate sizes simply contain no tiles.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The canonical world dimensions ([`WORLD_WIDTH`] × [`WORLD_HEIGHT`]).
    #[inline]
    pub const fn world() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }

    /// Total number of tiles.
    #[inline]
    pub const fn len(self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Whether the grid contains no tiles.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Row-major flat index of `p`: `y * width + x`.
    ///
    /// The caller must ensure `p` is in bounds (see [`GridSize::contains`]);
    /// an out-of-bounds point yields a meaningless index.
    #[inline]
    pub const fn flat_index(self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Inverse of [`GridSize::flat_index`].
    #[inline]
    pub const fn point_at(self, idx: usize) -> Point {
        Point::new(
            (idx % self.width as usize) as i32,
            (idx / self.width as usize) as i32,
        )
    }
}
