use log::{debug, info};
use smallvec::SmallVec;

use crate::components::Components;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::grid::{Direction, Grid, Position};
use crate::search::{best_first_search, PathFindResult, SearchStatus, Successor, Visit};
use crate::{waypoints_to_path, C, N_SMALLVEC_SIZE};

pub mod astar;
pub mod best_first;
pub mod dijkstra;
pub mod jps;
pub mod jps_plus;

/// Checks that both endpoints are inside the grid and walkable.
pub fn validate_endpoints(grid: &Grid, start: Position, goal: Position) -> Result<(), SearchError> {
    if !grid.is_walkable(start) {
        return Err(SearchError::InvalidStart(start));
    }
    if !grid.is_walkable(goal) {
        return Err(SearchError::InvalidGoal(goal));
    }
    Ok(())
}

/// The plain 4-neighbourhood of a node, one check per direction examined.
pub(crate) fn cardinal_successors(
    grid: &Grid,
    visit: &Visit<u32>,
    checks: &mut usize,
) -> SmallVec<[Successor<u32>; N_SMALLVEC_SIZE]> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            *checks += 1;
            let position = visit.position + direction;
            grid.is_walkable(position).then_some(Successor {
                position,
                cost: C,
                direction,
            })
        })
        .collect()
}

/// Validates, searches and expands the waypoints of `solver` into a full path.
pub(crate) fn run_solver<S: GridSolver + ?Sized>(
    solver: &S,
    grid: &Grid,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<PathFindResult, SearchError> {
    validate_endpoints(grid, start, goal)?;
    debug!("{}: searching from {} to {}", solver.name(), start, goal);
    let mut result = best_first_search(
        start,
        goal,
        |visit, checks| solver.successors(grid, visit, &goal, checks),
        |point| solver.heuristic(point, &goal),
        |g, h| solver.priority(g, h),
        config,
    );
    result.path = waypoints_to_path(result.path);
    Ok(result)
}

pub trait GridSolver {
    /// Container type for successors; you can keep this fixed to SmallVec if you prefer.
    type Successors: IntoIterator<Item = Successor<u32>>;

    fn name(&self) -> &'static str;

    /// Estimate of the remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Position, p2: &Position) -> u32;

    /// Frontier key computed from the accumulated cost and the heuristic estimate.
    fn priority(&self, g: u32, h: u32) -> u32;

    fn successors(
        &self,
        grid: &Grid,
        visit: &Visit<u32>,
        goal: &Position,
        checks: &mut usize,
    ) -> Self::Successors;

    /// Unit cost of a path of 4-adjacent or straight-line waypoints.
    fn get_path_cost(&self, path: &[Position]) -> u32 {
        path.windows(2)
            .map(|w| w[0].manhattan_distance(&w[1]) * C)
            .sum()
    }

    /// Computes a path from start to goal. Fails if either endpoint is outside the grid or
    /// blocked; an unreachable goal is reported through [SearchStatus::Unreachable].
    fn get_path_single_goal(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<PathFindResult, SearchError> {
        run_solver(self, grid, start, goal, config)
    }

    /// Like [get_path_single_goal](Self::get_path_single_goal), but answers immediately when
    /// `components` shows that start and goal are not connected.
    fn get_path_with_components(
        &self,
        grid: &Grid,
        components: &Components,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<PathFindResult, SearchError> {
        validate_endpoints(grid, start, goal)?;
        if !components.connected(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(PathFindResult {
                trace: config.record_trace.then(Vec::new),
                ..PathFindResult::not_found(SearchStatus::Unreachable)
            });
        }
        self.get_path_single_goal(grid, start, goal, config)
    }
}
