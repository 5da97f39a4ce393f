//! # grid_search
//!
//! Single-source, single-target pathfinding on a 4-connected, uniform-cost occupancy grid.
//! Implements uniform-cost search (Dijkstra), greedy Best-First search, A*,
//! [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search) and JPS+, which replaces
//! the jumps of JPS by lookups in a table precomputed once per grid.
//!
//! Every search returns a [PathFindResult] holding the full cell path, its cost and diagnostic
//! counters, or a [SearchError] when an endpoint is outside the grid or blocked. A goal that
//! cannot be reached is not an error; it is reported as [SearchStatus::Unreachable] with an
//! empty path. Optionally, [Components] can be precomputed to rule out unreachable goals
//! without searching.
//!
//! ```
//! use grid_search::{find_path_astar, Grid, Position};
//!
//! let grid: Grid = "S..\n.#.\n..G\n".parse().unwrap();
//! let result = find_path_astar(&grid, Position::new(0, 0), Position::new(2, 2)).unwrap();
//! assert_eq!(result.cost, Some(4));
//! ```
pub mod components;
pub mod config;
pub mod error;
pub mod frontier;
pub mod geometry;
pub mod grid;
pub mod jump_table;
pub mod search;
pub mod solver;

use itertools::Itertools;

pub use crate::components::Components;
pub use crate::config::SearchConfig;
pub use crate::error::SearchError;
pub use crate::geometry::JumpTarget;
pub use crate::grid::{Cell, Direction, Grid, ParseGridError, Position};
pub use crate::jump_table::JumpTable;
pub use crate::search::{PathFindResult, SearchNode, SearchStatus, TraceEvent, TraceKind};
use crate::solver::{
    astar::AstarSolver, best_first::BestFirstSolver, dijkstra::DijkstraSolver, jps::JpsSolver,
    jps_plus::JpsPlusSolver, GridSolver,
};

/// Cost of a single cardinal step.
pub const C: u32 = 1;
/// A cell has at most this many successors on a 4-grid.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Turns waypoints into a path on the grid which can be followed step by step. Between two
/// waypoints the column is matched first, then the row, so straight-line waypoints (as produced
/// by jump point search) expand into the cells they skip over.
pub fn waypoints_to_path(waypoints: Vec<Position>) -> Vec<Position> {
    let mut path: Vec<Position> = waypoints.first().copied().into_iter().collect();
    for (from, to) in waypoints.into_iter().tuple_windows() {
        let mut current = from;
        while current.col != to.col {
            current.col += (to.col - current.col).signum();
            path.push(current);
        }
        while current.row != to.row {
            current.row += (to.row - current.row).signum();
            path.push(current);
        }
    }
    path
}

pub fn find_path_dijkstra(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<PathFindResult, SearchError> {
    DijkstraSolver.get_path_single_goal(grid, start, goal, &SearchConfig::default())
}

pub fn find_path_best_first(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<PathFindResult, SearchError> {
    BestFirstSolver.get_path_single_goal(grid, start, goal, &SearchConfig::default())
}

pub fn find_path_astar(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<PathFindResult, SearchError> {
    AstarSolver::new().get_path_single_goal(grid, start, goal, &SearchConfig::default())
}

pub fn find_path_jps(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<PathFindResult, SearchError> {
    JpsSolver.get_path_single_goal(grid, start, goal, &SearchConfig::default())
}

/// Builds the [JumpTable] consumed by [find_path_jps_plus]. Deterministic in the grid; rebuild
/// it whenever the grid's walkability changes.
pub fn preprocess_grid(grid: &Grid) -> JumpTable {
    JumpTable::new(grid)
}

/// Runs JPS+ on the grid snapshot the table was built from.
pub fn find_path_jps_plus(
    table: &JumpTable,
    start: Position,
    goal: Position,
) -> Result<PathFindResult, SearchError> {
    JpsPlusSolver::new(table).find_path(start, goal, &SearchConfig::default())
}
