use grid_search::{
    preprocess_grid,
    solver::{
        astar::AstarSolver, best_first::BestFirstSolver, dijkstra::DijkstraSolver, jps::JpsSolver,
        jps_plus::JpsPlusSolver, GridSolver,
    },
    Grid, Position, SearchConfig,
};

// Runs every solver on the same map and prints the cost of the path found together with the
// work needed to find it.

const MAP: &str = "\
S.........#.........
.########.#.#######.
.#......#.#.#.....#.
.#.####.#...#.###.#.
.#.#..#.#####.#.#.#.
.#.#..#.......#.#.#.
.#.##.#########.#.#.
.#..............#...
.################.#.
..................#G
";

fn report<S: GridSolver>(solver: &S, grid: &Grid, start: Position, goal: Position) {
    match solver.get_path_single_goal(grid, start, goal, &SearchConfig::default()) {
        Ok(result) => println!(
            "{:>10}: {:?} cost {:?}, {} expanded, {} checks",
            solver.name(),
            result.status,
            result.cost,
            result.expanded,
            result.checks
        ),
        Err(e) => println!("{:>10}: {}", solver.name(), e),
    }
}

fn main() {
    let grid: Grid = MAP.parse().unwrap();
    println!("{}", grid);
    let start = Position::new(0, 0);
    let goal = Position::new(9, 19);
    let table = preprocess_grid(&grid);

    report(&DijkstraSolver, &grid, start, goal);
    report(&BestFirstSolver, &grid, start, goal);
    report(&AstarSolver::new(), &grid, start, goal);
    report(&AstarSolver::weighted(2.0), &grid, start, goal);
    report(&JpsSolver, &grid, start, goal);
    report(&JpsPlusSolver::new(&table), &grid, start, goal);
}
