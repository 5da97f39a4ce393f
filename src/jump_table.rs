use core::fmt;
use grid_util::{SimpleValueGrid, ValueGrid};
use log::debug;

use crate::geometry::{is_forced, JumpTarget};
use crate::grid::{Direction, Grid, Position};

/// Precomputed goal-independent jumps for every walkable cell and cardinal direction, as used by
/// JPS+. The table keeps a snapshot of the grid it was built from together with its fingerprint;
/// it must be rebuilt when the walkability of the grid changes.
#[derive(Clone, Debug)]
pub struct JumpTable {
    grid: Grid,
    fingerprint: u64,
    entries: SimpleValueGrid<[JumpTarget; 4]>,
}

impl PartialEq for JumpTable {
    fn eq(&self, other: &JumpTable) -> bool {
        self.fingerprint == other.fingerprint
            && self.grid == other.grid
            && self
                .grid
                .positions()
                .all(|p| self.entries.get_point(p.into()) == other.entries.get_point(p.into()))
    }
}

impl Eq for JumpTable {}

impl JumpTable {
    /// Builds the table with four dynamic-programming sweeps. Horizontal runs are resolved first
    /// since a vertical run must stop wherever a horizontal scan would find a jump point. Each
    /// entry equals [scan](crate::geometry::scan) from that cell with no goal.
    pub fn new(grid: &Grid) -> JumpTable {
        let mut table = JumpTable {
            grid: grid.clone(),
            fingerprint: grid.fingerprint(),
            entries: SimpleValueGrid::new(
                grid.width(),
                grid.height(),
                [JumpTarget::Blocked; 4],
            ),
        };
        let w = grid.width() as i32;
        let h = grid.height() as i32;
        for row in 0..h {
            for col in (0..w).rev() {
                table.fill(Position::new(row, col), Direction::Right);
            }
            for col in 0..w {
                table.fill(Position::new(row, col), Direction::Left);
            }
        }
        for col in 0..w {
            for row in (0..h).rev() {
                table.fill(Position::new(row, col), Direction::Down);
            }
            for row in 0..h {
                table.fill(Position::new(row, col), Direction::Up);
            }
        }
        debug!(
            "Built jump table for {}x{} grid ({} jump points)",
            grid.width(),
            grid.height(),
            table.jump_point_count()
        );
        table
    }

    /// Resolves one entry from the already resolved entry of the next cell along `dir`.
    fn fill(&mut self, pos: Position, dir: Direction) {
        if !self.grid.is_walkable(pos) {
            return;
        }
        let next = pos + dir;
        let target = if !self.grid.is_walkable(next) {
            JumpTarget::Blocked
        } else if is_forced(&self.grid, next, dir)
            || dir.is_vertical()
                && [Direction::Left, Direction::Right]
                    .into_iter()
                    .any(|side| self.get(next, side).is_jump_point())
        {
            JumpTarget::JumpPoint(next)
        } else {
            match self.get(next, dir) {
                JumpTarget::Blocked => JumpTarget::DeadEnd(next),
                further => further,
            }
        };
        let mut slots = self.entries.get_point(pos.into());
        slots[dir.index()] = target;
        self.entries.set_point(pos.into(), slots);
    }

    /// The precomputed jump from `pos` in `dir`. Blocked and out-of-bounds cells yield
    /// [JumpTarget::Blocked].
    pub fn get(&self, pos: Position, dir: Direction) -> JumpTarget {
        if !self.grid.in_bounds(pos) {
            return JumpTarget::Blocked;
        }
        self.entries.get_point(pos.into())[dir.index()]
    }

    /// The grid snapshot the table was built from.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Checks whether `grid` has the same dimensions and walkability as the grid this table was
    /// built from.
    pub fn is_built_for(&self, grid: &Grid) -> bool {
        self.fingerprint == grid.fingerprint()
            && self.grid.width() == grid.width()
            && self.grid.height() == grid.height()
    }

    /// Marks, per cell, whether it is the target of some entry.
    fn jump_point_mask(&self) -> SimpleValueGrid<bool> {
        let mut marked = SimpleValueGrid::new(self.grid.width(), self.grid.height(), false);
        for p in self.grid.positions() {
            for target in self.entries.get_point(p.into()) {
                if let Some(j) = target.jump_point() {
                    marked.set_point(j.into(), true);
                }
            }
        }
        marked
    }

    /// Number of distinct cells that appear as a jump point in some entry.
    pub fn jump_point_count(&self) -> usize {
        let marked = self.jump_point_mask();
        self.grid
            .positions()
            .filter(|p| marked.get_point((*p).into()))
            .count()
    }
}

impl fmt::Display for JumpTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Jump points:")?;
        let marked = self.jump_point_mask();
        for row in 0..self.grid.height() as i32 {
            let line: String = (0..self.grid.width() as i32)
                .map(|col| {
                    let pos = Position::new(row, col);
                    if !self.grid.is_walkable(pos) {
                        '#'
                    } else if marked.get_point(pos.into()) {
                        'J'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
