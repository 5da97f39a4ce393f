use log::info;
use petgraph::unionfind::UnionFind;

use crate::grid::{Direction, Grid, Position};

/// Connected components of the walkable cells of a [Grid] under 4-connectivity, maintained in a
/// [UnionFind] structure. Used to answer reachability without flood-filling through a search.
#[derive(Clone, Debug)]
pub struct Components {
    /// Snapshot of the grid, which also maps positions to union-find indices.
    grid: Grid,
    sets: UnionFind<usize>,
}

impl Components {
    /// Links up every walkable cell with its walkable right and lower neighbour.
    pub fn new(grid: &Grid) -> Components {
        info!(
            "Generating connected components for {}x{} grid",
            grid.width(),
            grid.height()
        );
        let mut sets = UnionFind::new(grid.width() * grid.height());
        for point in grid.positions() {
            if !grid.is_walkable(point) {
                continue;
            }
            let Some(parent_ix) = grid.index(point) else {
                continue;
            };
            for dir in [Direction::Right, Direction::Down] {
                let n = point + dir;
                if grid.is_walkable(n) {
                    if let Some(ix) = grid.index(n) {
                        sets.union(parent_ix, ix);
                    }
                }
            }
        }
        Components {
            grid: grid.clone(),
            sets,
        }
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn component(&self, p: &Position) -> Option<usize> {
        self.grid.index(*p).map(|ix| self.sets.find(ix))
    }

    /// Checks if start and goal are on the same component. Out-of-bounds positions are never
    /// connected. Blocked cells are singleton components, so a blocked cell is only connected
    /// to itself.
    pub fn connected(&self, start: &Position, goal: &Position) -> bool {
        match (self.grid.index(*start), self.grid.index(*goal)) {
            (Some(a), Some(b)) => self.sets.equiv(a, b),
            _ => false,
        }
    }
}
