//! Grid navigation for the armada tile world.
//!
//! This crate moves ships across the fixed-size tile world: the caller
//! supplies an up-to-date obstacle snapshot (a [`Chart`]) together with the
//! current and target tile, and [`Navigator`] answers with an ordered list
//! of waypoints.
//!
//! - [`Navigator::find_path`] is the plain contract: waypoints from the
//!   tile after start through the goal, or empty when there is no route.
//! - [`Navigator::plan`] is the same search with a tagged [`PathOutcome`],
//!   for callers that need to tell "goal blocked" from "already there"
//!   from "unreachable".
//!
//! Every search allocates its own working state and drops it on return, so
//! one `Navigator` can serve concurrent callers.

mod chart;
mod distance;
mod node;
mod search;

pub use chart::{CLASS_OPEN_WATER, Chart, ChartError, SeaChart};
pub use distance::{chebyshev, euclidean, octile};
pub use node::{SearchNode, UNVISITED_PARENT};
pub use search::{Navigator, PathOutcome};
