//! Isometric world↔screen projection.
//!
//! The world is drawn in a classic 2:1 dimetric projection: one tile spans
//! [`TILE_WIDTH`] × [`TILE_HEIGHT`] pixels, with the world X axis running
//! toward the lower right of the screen and the world Y axis toward the
//! lower left.

use crate::geom::Point;

/// On-screen width of one tile, in pixels.
pub const TILE_WIDTH: i32 = 64;
/// On-screen height of one tile, in pixels.
pub const TILE_HEIGHT: i32 = 32;
/// Half of [`TILE_WIDTH`].
pub const TILE_HALF_WIDTH: i32 = TILE_WIDTH / 2;
/// Half of [`TILE_HEIGHT`].
pub const TILE_HALF_HEIGHT: i32 = TILE_HEIGHT / 2;

/// Project a world tile coordinate to screen pixels.
///
/// `sx = (wx - wy) * tile_half_width`, `sy = (wx + wy) * tile_half_height`.
#[inline]
pub const fn world_to_screen(world: Point, tile_half_width: i32, tile_half_height: i32) -> Point {
    Point::new(
        (world.x - world.y) * tile_half_width,
        (world.x + world.y) * tile_half_height,
    )
}

/// Map a screen pixel back to the world tile under it.
///
/// Inverse of [`world_to_screen`] up to integer truncation:
/// `wx = sx/tw + sy/th`, `wy = sy/th - sx/tw`. Precision is lost near tile
/// boundaries, so this is suitable for hit-testing only; do not expect
/// `screen_to_world(world_to_screen(p)) == p` in general.
#[inline]
pub const fn screen_to_world(screen: Point, tile_width: i32, tile_height: i32) -> Point {
    Point::new(
        screen.x / tile_width + screen.y / tile_height,
        screen.y / tile_height - screen.x / tile_width,
    )
}

/// Vertical screen offset for a tile raised `elevation` levels.
///
/// Screen Y grows downward, so each level of elevation lifts the tile by a
/// full tile height from the half-height baseline.
#[inline]
pub const fn adjust_height(tile_half_height: i32, tile_height: i32, elevation: i32) -> i32 {
    tile_half_height - elevation * tile_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_origin() {
        let s = world_to_screen(Point::ZERO, TILE_HALF_WIDTH, TILE_HALF_HEIGHT);
        assert_eq!(s, Point::ZERO);
    }

    #[test]
    fn axes_project_to_diamond() {
        // +X goes lower-right, +Y goes lower-left.
        let east = world_to_screen(Point::new(1, 0), TILE_HALF_WIDTH, TILE_HALF_HEIGHT);
        let south = world_to_screen(Point::new(0, 1), TILE_HALF_WIDTH, TILE_HALF_HEIGHT);
        assert_eq!(east, Point::new(TILE_HALF_WIDTH, TILE_HALF_HEIGHT));
        assert_eq!(south, Point::new(-TILE_HALF_WIDTH, TILE_HALF_HEIGHT));
    }

    #[test]
    fn screen_to_world_hits_tile_centers() {
        // Tile-center screen positions map back exactly.
        for &(wx, wy) in &[(0, 0), (3, 4), (10, 2), (7, 7)] {
            let world = Point::new(wx, wy);
            let screen = Point::new(
                (wx - wy) * TILE_WIDTH,
                (wx + wy) * TILE_HEIGHT,
            );
            assert_eq!(screen_to_world(screen, TILE_WIDTH, TILE_HEIGHT), world);
        }
    }

    #[test]
    fn screen_to_world_truncates_near_edges() {
        // One pixel short of the next tile still resolves to this tile's
        // neighborhood; the mapping is approximate by design.
        let near = screen_to_world(Point::new(TILE_WIDTH - 1, 0), TILE_WIDTH, TILE_HEIGHT);
        assert_eq!(near, Point::ZERO);
    }

    #[test]
    fn adjust_height_per_level() {
        assert_eq!(adjust_height(TILE_HALF_HEIGHT, TILE_HEIGHT, 0), TILE_HALF_HEIGHT);
        assert_eq!(
            adjust_height(TILE_HALF_HEIGHT, TILE_HEIGHT, 1),
            TILE_HALF_HEIGHT - TILE_HEIGHT
        );
        assert_eq!(
            adjust_height(TILE_HALF_HEIGHT, TILE_HEIGHT, 3),
            TILE_HALF_HEIGHT - 3 * TILE_HEIGHT
        );
    }
}
