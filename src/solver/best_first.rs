use smallvec::SmallVec;

use crate::grid::{Grid, Position};
use crate::search::{Successor, Visit};
use crate::solver::{cardinal_successors, GridSolver};
use crate::{C, N_SMALLVEC_SIZE};

/// Greedy best-first search: the frontier is ordered by the heuristic estimate alone. Finds a
/// path whenever one exists, but not necessarily a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFirstSolver;

impl GridSolver for BestFirstSolver {
    type Successors = SmallVec<[Successor<u32>; N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "Best-First"
    }

    fn successors(
        &self,
        grid: &Grid,
        visit: &Visit<u32>,
        _: &Position,
        checks: &mut usize,
    ) -> Self::Successors {
        cardinal_successors(grid, visit, checks)
    }

    fn heuristic(&self, p1: &Position, p2: &Position) -> u32 {
        p1.manhattan_distance(p2) * C
    }

    fn priority(&self, _: u32, h: u32) -> u32 {
        h
    }
}
