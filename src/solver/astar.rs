use smallvec::SmallVec;

use crate::grid::{Grid, Position};
use crate::search::{Successor, Visit};
use crate::solver::{cardinal_successors, GridSolver};
use crate::{C, N_SMALLVEC_SIZE};

/// A* with the Manhattan distance, which is admissible and consistent on a 4-connected
/// unit-cost grid. A `heuristic_factor` above 1.0 trades optimality for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
    pub fn weighted(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[Successor<u32>; N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "A*"
    }

    fn successors(
        &self,
        grid: &Grid,
        visit: &Visit<u32>,
        _goal: &Position,
        checks: &mut usize,
    ) -> Self::Successors {
        cardinal_successors(grid, visit, checks)
    }

    /// Just the cost times a heuristic factor.
    fn heuristic(&self, p1: &Position, p2: &Position) -> u32 {
        ((p1.manhattan_distance(p2) * C) as f32 * self.heuristic_factor) as u32
    }

    fn priority(&self, g: u32, h: u32) -> u32 {
        g + h
    }
}
