use smallvec::SmallVec;

use crate::geometry::scan;
use crate::grid::{Direction, Grid, Position};
use crate::search::{Successor, Visit};
use crate::solver::GridSolver;
use crate::{C, N_SMALLVEC_SIZE};

/// [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search) restricted to the four
/// cardinal directions. Only jump points enter the frontier; the cells in between are filled
/// back in when the path is reconstructed.
#[derive(Clone, Copy, Debug, Default)]
pub struct JpsSolver;

/// Every direction except straight back the way the node was entered.
pub(crate) fn pruned_directions(arrival: Option<Direction>) -> impl Iterator<Item = Direction> {
    Direction::ALL
        .into_iter()
        .filter(move |dir| arrival.map_or(true, |a| *dir != a.reverse()))
}

impl GridSolver for JpsSolver {
    type Successors = SmallVec<[Successor<u32>; N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "JPS"
    }

    fn successors(
        &self,
        grid: &Grid,
        visit: &Visit<u32>,
        goal: &Position,
        checks: &mut usize,
    ) -> Self::Successors {
        pruned_directions(visit.arrival)
            .filter_map(|direction| {
                // Jumps the neighbour, skipping over cells with nothing to offer.
                scan(grid, visit.position, direction, Some(*goal), checks)
                    .jump_point()
                    .map(|position| Successor {
                        position,
                        cost: visit.position.manhattan_distance(&position) * C,
                        direction,
                    })
            })
            .collect()
    }

    fn heuristic(&self, p1: &Position, p2: &Position) -> u32 {
        p1.manhattan_distance(p2) * C
    }

    fn priority(&self, g: u32, h: u32) -> u32 {
        g + h
    }
}
