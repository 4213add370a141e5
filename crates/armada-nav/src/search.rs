//! Best-first shortest-path search over the tile world.

use std::collections::BinaryHeap;

use armada_core::{GridSize, Point};

use crate::chart::Chart;
use crate::distance::euclidean;
use crate::node::{OpenEntry, SearchNode, UNVISITED_PARENT};

/// Result of a single [`Navigator::plan`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome {
    /// Ordered waypoints from the tile after start through the goal.
    Found(Vec<Point>),
    /// Start equals the goal; there is nothing to traverse.
    AlreadyAtGoal,
    /// The goal is outside the grid or blocked.
    InvalidGoal,
    /// The search space was exhausted without reaching the goal.
    Unreachable,
}

impl PathOutcome {
    /// Whether a route was found.
    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The waypoints, or an empty vector for every other outcome.
    pub fn into_path(self) -> Vec<Point> {
        match self {
            Self::Found(path) => path,
            _ => Vec::new(),
        }
    }
}

/// Shortest-path search engine for a fixed-size tile world.
///
/// A `Navigator` is, conceptually, a pure function of
/// `(start, end, chart)`: every search allocates its own node and closed
/// tables, runs to completion, and drops them on return. Nothing is shared
/// across calls, so one value can serve concurrent searches.
///
/// Movement is 8-directional with a uniform step cost of 1 (a diagonal
/// step costs the same as an orthogonal one), and the heuristic is
/// straight-line distance, which keeps the search optimal in step count.
///
/// Every call re-initializes one node per tile of the grid, regardless of
/// how close the endpoints are, and the worst case is effectively quadratic
/// in grid size. That is acceptable for worlds in the low hundreds of tiles
/// per side; larger grids would want a sparse visited map instead.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    size: GridSize,
}

impl Navigator {
    /// Create an engine for a grid of the given dimensions.
    #[inline]
    pub const fn new(size: GridSize) -> Self {
        Self { size }
    }

    /// Engine for the canonical world dimensions.
    #[inline]
    pub const fn world() -> Self {
        Self::new(GridSize::world())
    }

    /// The grid this engine searches.
    #[inline]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Find the shortest route from `start` to `end`.
    ///
    /// Returns the waypoints in order, excluding `start` and including
    /// `end`; empty when there is no route, the goal is invalid, or the
    /// ship is already there. Use [`Navigator::plan`] to distinguish those
    /// cases.
    pub fn find_path(&self, start: Point, end: Point, chart: &impl Chart) -> Vec<Point> {
        self.plan(start, end, chart).into_path()
    }

    /// Find the shortest route from `start` to `end`, reporting why no
    /// waypoints were produced when none are.
    pub fn plan(&self, start: Point, end: Point, chart: &impl Chart) -> PathOutcome {
        let size = self.size;

        if !size.contains(end) || !chart.is_passable(end) {
            log::debug!("rejecting goal {end}: out of bounds or blocked");
            return PathOutcome::InvalidGoal;
        }
        if start == end {
            return PathOutcome::AlreadyAtGoal;
        }
        // The seeded start is the one entry queued without a validity
        // check; popping it from the open set discards it when it is
        // outside the grid or blocked, which empties the set and ends the
        // search before any expansion.
        if !size.contains(start) || !chart.is_passable(start) {
            log::debug!("no route from {start}: start tile is not sailable");
            return PathOutcome::Unreachable;
        }

        let total = size.len();
        let mut nodes: Vec<SearchNode> = (0..total)
            .map(|idx| SearchNode::unvisited(size.point_at(idx)))
            .collect();
        let mut closed = vec![false; total];
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;

        let start_idx = size.flat_index(start);
        nodes[start_idx] = SearchNode::seed(start);
        open.push(OpenEntry {
            f: 0.0,
            seq,
            idx: start_idx,
        });
        seq += 1;

        loop {
            // Safety bound: one useful entry per tile. An open set that has
            // grown past the whole grid is going nowhere.
            if open.len() >= total {
                break;
            }
            let Some(entry) = open.pop() else {
                break;
            };
            let ci = entry.idx;
            if closed[ci] {
                // Stale duplicate from an earlier improvement.
                continue;
            }
            closed[ci] = true;
            let current = nodes[ci];

            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let np = current.pos.shift(dx, dy);
                    if !size.contains(np) || !chart.is_passable(np) {
                        continue;
                    }
                    let ni = size.flat_index(np);
                    if np == end {
                        // Short-circuit: link the goal and reconstruct
                        // without waiting for it to be popped.
                        nodes[ni].parent = current.pos;
                        return PathOutcome::Found(self.reconstruct(&nodes, end));
                    }
                    if closed[ni] {
                        continue;
                    }
                    let new_g = current.g + 1.0;
                    let new_h = euclidean(np, end);
                    let new_f = new_g + new_h;
                    if new_f < nodes[ni].f {
                        nodes[ni] = SearchNode {
                            pos: np,
                            parent: current.pos,
                            g: new_g,
                            h: new_h,
                            f: new_f,
                        };
                        open.push(OpenEntry {
                            f: new_f,
                            seq,
                            idx: ni,
                        });
                        seq += 1;
                    }
                }
            }
        }

        log::debug!("no route from {start} to {end}: search space exhausted");
        PathOutcome::Unreachable
    }

    /// Walk parent links backward from `end`, then reverse into a forward
    /// path. The start tile is its own parent and is not collected.
    fn reconstruct(&self, nodes: &[SearchNode], end: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = &nodes[self.size.flat_index(end)];
        loop {
            if cur.pos == cur.parent {
                break;
            }
            path.push(cur.pos);
            if cur.parent == UNVISITED_PARENT {
                // Broken link chain; keep what was collected.
                break;
            }
            cur = &nodes[self.size.flat_index(cur.parent)];
        }
        path.reverse();
        path
    }
}
