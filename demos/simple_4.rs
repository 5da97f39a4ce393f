use grid_search::{find_path_astar, Cell, Grid, Position};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(3, 3, Cell::Walkable);
    grid.set(Position::new(1, 1), Cell::Blocked);
    println!("{}", grid);
    let start = Position::new(0, 0);
    let end = Position::new(2, 2);
    let result = find_path_astar(&grid, start, end).unwrap();
    println!("Path (cost {:?}):", result.cost);
    for p in result.path {
        println!("{}", p);
    }
}
