//! Distance metrics on the tile grid.

use armada_core::Point;

/// Straight-line (Euclidean) distance between two tiles.
///
/// The engine's heuristic: it never overestimates the true 8-directional
/// cost under unit steps, so the search stays optimal.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance: the optimal number of 8-way unit steps.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance: unit orthogonal steps, `√2` diagonal steps.
///
/// Admissible under the √2-diagonal cost model, not under this engine's
/// uniform unit cost; provided for callers pricing diagonals by length.
#[inline]
pub fn octile(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs() as f32;
    let dy = (a.y - b.y).abs() as f32;
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    hi + (std::f32::consts::SQRT_2 - 1.0) * lo
}
