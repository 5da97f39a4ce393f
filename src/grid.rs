use core::fmt;
use fxhash::FxHasher64;
use grid_util::{BoolGrid, Point, ValueGrid};
use std::hash::Hasher;
use std::ops::Add;
use std::str::FromStr;

/// A cell coordinate. Signed so that out-of-bounds queries can be represented and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }
    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), which is the
    /// exact unit cost of an unobstructed 4-connected path.
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
    /// Direction of a straight move from `self` to `other`, if they share a row or column.
    pub fn dir_to(&self, other: &Position) -> Option<Direction> {
        match (other.row - self.row, other.col - self.col) {
            (0, 0) => None,
            (dr, 0) if dr < 0 => Some(Direction::Up),
            (_, 0) => Some(Direction::Down),
            (0, dc) if dc < 0 => Some(Direction::Left),
            (0, _) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Add<Direction> for Position {
    type Output = Position;
    fn add(self, dir: Direction) -> Position {
        let (dr, dc) = dir.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

/// [Point] is `(x, y)`, i.e. `(col, row)`.
impl From<Position> for Point {
    fn from(p: Position) -> Point {
        Point::new(p.col, p.row)
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Position {
        Position::new(p.y, p.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal directions. Diagonal movement is not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row, col) offset of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
    pub fn reverse(self) -> Direction {
        Direction::ALL[(self.index() + 2) % 4]
    }
    /// The two directions at right angles to `self`, clockwise one first.
    pub fn perpendicular(self) -> [Direction; 2] {
        [
            Direction::ALL[(self.index() + 1) % 4],
            Direction::ALL[(self.index() + 3) % 4],
        ]
    }
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
    /// Slot used by per-direction tables, in the order of [Direction::ALL].
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Walkable,
    Blocked,
}

/// A rectangular occupancy grid, stored as a [BoolGrid] in which `true` marks a blocked cell.
/// The searches only ever read it.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: BoolGrid,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(0, 0, Cell::Walkable)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Grid) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.positions().all(|p| self.get(p) == other.get(p))
    }
}

impl Eq for Grid {}

impl Grid {
    pub fn new(width: usize, height: usize, default_value: Cell) -> Grid {
        Grid {
            cells: BoolGrid::new(width, height, default_value == Cell::Blocked),
        }
    }
    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.cells.index_in_bounds(pos.col, pos.row)
    }
    /// False for positions outside the grid as well as for blocked cells.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Walkable)
    }
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(if self.cells.get_point(pos.into()) {
            Cell::Blocked
        } else {
            Cell::Walkable
        })
    }
    /// Sets a cell, ignoring positions outside the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.in_bounds(pos) {
            self.cells.set_point(pos.into(), cell == Cell::Blocked);
        }
    }
    pub fn set_blocked(&mut self, pos: Position, blocked: bool) {
        self.set(pos, if blocked { Cell::Blocked } else { Cell::Walkable });
    }
    /// Flat index of an in-bounds position, for per-cell structures such as [UnionFind](petgraph::unionfind::UnionFind).
    pub fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| self.cells.get_ix_point(&pos.into()))
    }
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height() as i32)
            .flat_map(move |row| (0..self.width() as i32).map(move |col| Position::new(row, col)))
    }
    pub fn walkable_count(&self) -> usize {
        self.positions().filter(|p| self.is_walkable(*p)).count()
    }
    /// Hash of the dimensions and every cell. Two grids with equal fingerprints are treated as
    /// the same grid by [JumpTable](crate::JumpTable).
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher64::default();
        hasher.write_usize(self.width());
        hasher.write_usize(self.height());
        for p in self.positions() {
            hasher.write_u8(self.is_walkable(p) as u8);
        }
        hasher.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseGridError {
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownCell { row: usize, col: usize, symbol: char },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseGridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            ParseGridError::UnknownCell { row, col, symbol } => {
                write!(f, "unknown cell symbol {symbol:?} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}

/// Parses an ASCII map. `#`, `@` and `T` are blocked; `.`, space, `S` and `G` are walkable.
/// Blank lines are skipped.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Grid, ParseGridError> {
        let rows: Vec<&str> = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Grid::new(width, rows.len(), Cell::Walkable);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseGridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    '#' | '@' | 'T' => Cell::Blocked,
                    '.' | ' ' | 'S' | 'G' => Cell::Walkable,
                    _ => return Err(ParseGridError::UnknownCell { row, col, symbol }),
                };
                grid.set(Position::new(row as i32, col as i32), cell);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height() as i32 {
            let line: String = (0..self.width() as i32)
                .map(|col| match self.get(Position::new(row, col)) {
                    Some(Cell::Blocked) => '#',
                    _ => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
