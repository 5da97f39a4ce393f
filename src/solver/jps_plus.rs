use smallvec::SmallVec;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geometry::JumpTarget;
use crate::grid::{Direction, Grid, Position};
use crate::jump_table::JumpTable;
use crate::search::{PathFindResult, Successor, Visit};
use crate::solver::jps::pruned_directions;
use crate::solver::{run_solver, GridSolver};
use crate::{C, N_SMALLVEC_SIZE};

/// JPS+ : jump point search driven by a [JumpTable] instead of scanning the grid during the
/// search. Produces the same jump points, and therefore the same costs, as
/// [JpsSolver](crate::solver::jps::JpsSolver).
#[derive(Clone, Copy, Debug)]
pub struct JpsPlusSolver<'a> {
    table: &'a JumpTable,
}

/// Whether `x` lies after `from` and no further than `to` along one axis.
fn within(from: i32, x: i32, to: i32) -> bool {
    (from < x && x <= to) || (to <= x && x < from)
}

impl<'a> JpsPlusSolver<'a> {
    pub fn new(table: &'a JumpTable) -> JpsPlusSolver<'a> {
        JpsPlusSolver { table }
    }

    pub fn table(&self) -> &'a JumpTable {
        self.table
    }

    /// Searches the grid snapshot held by the table.
    pub fn find_path(
        &self,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<PathFindResult, SearchError> {
        run_solver(self, self.table.grid(), start, goal, config)
    }

    /// Where a jump from `from` in `dir` lands: the nearest of the precomputed jump point, the
    /// goal if it lies on the run, and, for vertical runs, the cell level with the goal if a
    /// horizontal jump from there would reach it.
    fn landing(&self, from: Position, dir: Direction, goal: &Position) -> Option<Position> {
        let target = self.table.get(from, dir);
        let extent = target.extent()?;
        let mut candidates: SmallVec<[Position; 3]> = target.jump_point().into_iter().collect();

        let along = |p: &Position| if dir.is_vertical() { p.row } else { p.col };
        let across = |p: &Position| if dir.is_vertical() { p.col } else { p.row };
        if across(goal) == across(&from) && within(along(&from), along(goal), along(&extent)) {
            candidates.push(*goal);
        }
        if dir.is_vertical() && goal.col != from.col && within(from.row, goal.row, extent.row) {
            let level = Position::new(goal.row, from.col);
            let side = if goal.col > from.col {
                Direction::Right
            } else {
                Direction::Left
            };
            let reaches = match self.table.get(level, side) {
                JumpTarget::Blocked => false,
                JumpTarget::JumpPoint(_) => true,
                JumpTarget::DeadEnd(end) => within(level.col, goal.col, end.col),
            };
            if reaches {
                candidates.push(level);
            }
        }
        candidates
            .into_iter()
            .min_by_key(|p| from.manhattan_distance(p))
    }
}

impl GridSolver for JpsPlusSolver<'_> {
    type Successors = SmallVec<[Successor<u32>; N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "JPS+"
    }

    /// Ignores `grid`; the table's own snapshot is authoritative.
    fn successors(
        &self,
        _grid: &Grid,
        visit: &Visit<u32>,
        goal: &Position,
        checks: &mut usize,
    ) -> Self::Successors {
        pruned_directions(visit.arrival)
            .filter_map(|direction| {
                *checks += 1;
                self.landing(visit.position, direction, goal)
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

    /// Refuses to search a grid the table was not built from.
    fn get_path_single_goal(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<PathFindResult, SearchError> {
        if !self.table.is_built_for(grid) {
            return Err(SearchError::StaleJumpTable);
        }
        run_solver(self, grid, start, goal, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::solver::jps::JpsSolver;

    #[test]
    fn clamps_to_goal_between_jump_points() {
        // The goal sits in the middle of an open row, so no table entry points at it.
        let grid = Grid::new(7, 1, Cell::Walkable);
        let table = JumpTable::new(&grid);
        let solver = JpsPlusSolver::new(&table);
        let start = Position::new(0, 0);
        let goal = Position::new(0, 3);
        assert_eq!(
            solver.table().get(start, Direction::Right),
            JumpTarget::DeadEnd(Position::new(0, 6))
        );
        let result = solver
            .find_path(start, goal, &SearchConfig::default())
            .unwrap();
        assert_eq!(result.cost, Some(3));
        assert_eq!(result.path.len(), 4);
    }

    #[test]
    fn turns_level_with_goal() {
        let grid = Grid::new(10, 10, Cell::Walkable);
        let table = JumpTable::new(&grid);
        let solver = JpsPlusSolver::new(&table);
        assert_eq!(
            solver.landing(Position::new(0, 9), Direction::Down, &Position::new(5, 5)),
            Some(Position::new(5, 9))
        );
        let result = solver
            .find_path(
                Position::new(0, 0),
                Position::new(5, 5),
                &SearchConfig::default(),
            )
            .unwrap();
        assert_eq!(result.cost, Some(10));
    }

    #[test]
    fn matches_live_jps() {
        let grid: Grid = "\
            ...#......\n\
            .#.#.####.\n\
            .#...#....\n\
            .####..##.\n\
            ......#...\n\
            .##.#.#.#.\n\
            ....#...#.\n"
            .parse()
            .unwrap();
        let table = JumpTable::new(&grid);
        let solver = JpsPlusSolver::new(&table);
        let config = SearchConfig::default();
        let walkable: Vec<Position> = grid.positions().filter(|p| grid.is_walkable(*p)).collect();
        for &start in walkable.iter().step_by(3) {
            for &goal in walkable.iter().step_by(5) {
                let plus = solver.find_path(start, goal, &config).unwrap();
                let live = JpsSolver
                    .get_path_single_goal(&grid, start, goal, &config)
                    .unwrap();
                assert_eq!(plus.status, live.status, "{start} -> {goal}");
                assert_eq!(plus.cost, live.cost, "{start} -> {goal}");
            }
        }
    }

    #[test]
    fn stale_table_is_rejected() {
        let mut grid = Grid::new(4, 4, Cell::Walkable);
        let table = JumpTable::new(&grid);
        let solver = JpsPlusSolver::new(&table);
        grid.set(Position::new(1, 2), Cell::Blocked);
        let err = solver
            .get_path_single_goal(
                &grid,
                Position::new(0, 0),
                Position::new(3, 3),
                &SearchConfig::default(),
            )
            .unwrap_err();
        assert_eq!(err, SearchError::StaleJumpTable);
    }
}
