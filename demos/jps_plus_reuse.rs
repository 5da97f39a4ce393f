use grid_search::{find_path_jps_plus, preprocess_grid, Cell, Grid, Position};

// The jump table is built once and then answers many queries on the same grid. After the grid
// changes, the table has to be rebuilt.

fn main() {
    let mut grid = Grid::new(16, 8, Cell::Walkable);
    for row in 0..6 {
        grid.set(Position::new(row, 5), Cell::Blocked);
        grid.set(Position::new(7 - row, 10), Cell::Blocked);
    }
    let table = preprocess_grid(&grid);
    println!("{}", table);

    let goal = Position::new(0, 15);
    for row in 0..8 {
        let start = Position::new(row, 0);
        let result = find_path_jps_plus(&table, start, goal).unwrap();
        println!("{} -> {}: cost {:?}", start, goal, result.cost);
    }

    grid.set(Position::new(6, 5), Cell::Blocked);
    grid.set(Position::new(7, 5), Cell::Blocked);
    println!("table still current: {}", table.is_built_for(&grid));
    let table = preprocess_grid(&grid);
    let result = find_path_jps_plus(&table, Position::new(0, 0), goal).unwrap();
    println!("after closing the gap: {:?}", result.status);
}
