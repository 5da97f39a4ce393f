use smallvec::SmallVec;

use crate::grid::{Grid, Position};
use crate::search::{Successor, Visit};
use crate::solver::{cardinal_successors, GridSolver};
use crate::N_SMALLVEC_SIZE;

/// Uniform-cost search: the frontier is ordered by accumulated cost alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[Successor<u32>; N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "Dijkstra"
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

    fn heuristic(&self, _: &Position, _: &Position) -> u32 {
        0
    }

    fn priority(&self, g: u32, _: u32) -> u32 {
        g
    }
}
