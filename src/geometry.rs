//! Straight-line jump geometry on a 4-connected grid, shared by live jump point search and the
//! jump table preprocessor.
use crate::grid::{Direction, Grid, Position};

/// Outcome of scanning from a cell in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum JumpTarget {
    /// The very first step is blocked or leaves the grid.
    #[default]
    Blocked,
    /// The run reached a wall without meeting a jump point; holds the last walkable cell.
    DeadEnd(Position),
    /// The nearest jump point along the run.
    JumpPoint(Position),
}

impl JumpTarget {
    pub fn jump_point(self) -> Option<Position> {
        match self {
            JumpTarget::JumpPoint(p) => Some(p),
            _ => None,
        }
    }
    /// Furthest cell the scan visited, whether or not it is a jump point.
    pub fn extent(self) -> Option<Position> {
        match self {
            JumpTarget::Blocked => None,
            JumpTarget::DeadEnd(p) | JumpTarget::JumpPoint(p) => Some(p),
        }
    }
    pub fn is_jump_point(self) -> bool {
        matches!(self, JumpTarget::JumpPoint(_))
    }
}

/// Checks whether `node`, entered by moving in `dir`, has a forced neighbour: a perpendicular
/// neighbour that is walkable while the cell beside the previous position on that side is not.
pub fn is_forced(grid: &Grid, node: Position, dir: Direction) -> bool {
    let behind = node + dir.reverse();
    dir.perpendicular()
        .into_iter()
        .any(|side| grid.is_walkable(node + side) && !grid.is_walkable(behind + side))
}

/// Scans from `initial` in `dir`, stopping at the goal, at a cell with a forced neighbour or, when
/// moving vertically, at a cell from which a horizontal scan finds a jump point. Horizontal scans
/// do not branch, so the nesting depth is bounded regardless of run length. `checks` is
/// incremented for every walkable cell stepped onto.
pub fn scan(
    grid: &Grid,
    initial: Position,
    dir: Direction,
    goal: Option<Position>,
    checks: &mut usize,
) -> JumpTarget {
    let mut current = initial;
    loop {
        let next = current + dir;
        if !grid.is_walkable(next) {
            return if current == initial {
                JumpTarget::Blocked
            } else {
                JumpTarget::DeadEnd(current)
            };
        }
        *checks += 1;
        if goal == Some(next) || is_forced(grid, next, dir) {
            return JumpTarget::JumpPoint(next);
        }
        // Moving vertically, the goal or a turn may lie to the side of the run. Looking
        // sideways here keeps the horizontal branches of the search complete.
        if dir.is_vertical()
            && [Direction::Left, Direction::Right]
                .into_iter()
                .any(|side| scan(grid, next, side, goal, checks).is_jump_point())
        {
            return JumpTarget::JumpPoint(next);
        }
        current = next;
    }
}
