/// Small hand-made maps on which every solver's outcome is known exactly.
use grid_search::{
    find_path_astar, find_path_best_first, find_path_dijkstra, find_path_jps, find_path_jps_plus,
    preprocess_grid,
    solver::{
        astar::AstarSolver, best_first::BestFirstSolver, dijkstra::DijkstraSolver, jps::JpsSolver,
        jps_plus::JpsPlusSolver, GridSolver,
    },
    Cell, Components, Grid, PathFindResult, Position, SearchConfig, SearchError, SearchStatus,
    TraceKind,
};

/// Runs all five searches with default settings, in the order Dijkstra, Best-First, A*, JPS, JPS+.
fn all_solvers(grid: &Grid, start: Position, goal: Position) -> Vec<PathFindResult> {
    let table = preprocess_grid(grid);
    vec![
        find_path_dijkstra(grid, start, goal).unwrap(),
        find_path_best_first(grid, start, goal).unwrap(),
        find_path_astar(grid, start, goal).unwrap(),
        find_path_jps(grid, start, goal).unwrap(),
        find_path_jps_plus(&table, start, goal).unwrap(),
    ]
}

fn is_walk(grid: &Grid, path: &[Position]) -> bool {
    path.iter().all(|p| grid.is_walkable(*p))
        && path.windows(2).all(|w| w[0].manhattan_distance(&w[1]) == 1)
}

#[test]
fn centre_blocked() {
    //  ___
    // |S  |
    // | # |
    // |  G|
    //  ___
    let mut grid = Grid::new(3, 3, Cell::Walkable);
    grid.set(Position::new(1, 1), Cell::Blocked);
    let start = Position::new(0, 0);
    let goal = Position::new(2, 2);
    for result in all_solvers(&grid, start, goal) {
        assert_eq!(result.cost, Some(4));
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&goal));
        assert!(is_walk(&grid, &result.path));
    }
}

#[test]
fn single_gap_in_wall() {
    let grid: Grid = "\
        S.#..\n\
        ..#..\n\
        ..#..\n\
        ..#..\n\
        ....G\n"
        .parse()
        .unwrap();
    let start = Position::new(0, 0);
    let goal = Position::new(4, 4);
    let gap = Position::new(4, 2);
    for result in all_solvers(&grid, start, goal) {
        assert_eq!(result.cost, Some(8));
        assert!(result.path.contains(&gap));
        assert!(is_walk(&grid, &result.path));
    }
}

#[test]
fn open_grid() {
    let grid = Grid::new(4, 4, Cell::Walkable);
    let start = Position::new(0, 0);
    let goal = Position::new(3, 3);
    let results = all_solvers(&grid, start, goal);
    let greedy = &results[1];
    assert!(greedy.is_found());
    assert!(greedy.cost.unwrap() >= 6);
    assert_eq!(Some(greedy.path.len() as u32 - 1), greedy.cost);
    for (i, result) in results.iter().enumerate() {
        if i != 1 {
            assert_eq!(result.cost, Some(6));
        }
        assert!(is_walk(&grid, &result.path));
    }
}

#[test]
fn enclosed_goal() {
    let grid: Grid = "\
        S....\n\
        ..###\n\
        ..#G#\n\
        ..###\n"
        .parse()
        .unwrap();
    let start = Position::new(0, 0);
    let goal = Position::new(2, 3);
    for result in all_solvers(&grid, start, goal) {
        assert_eq!(result.status, SearchStatus::Unreachable);
        assert!(result.path.is_empty());
        assert_eq!(result.cost, None);
    }
}

#[test]
fn start_equals_goal() {
    let grid = Grid::new(3, 2, Cell::Walkable);
    let p = Position::new(1, 2);
    for result in all_solvers(&grid, p, p) {
        assert_eq!(result.path, vec![p]);
        assert_eq!(result.cost, Some(0));
        assert_eq!(result.expanded, 0);
    }
}

#[test]
fn invalid_endpoints() {
    let mut grid = Grid::new(3, 3, Cell::Walkable);
    grid.set(Position::new(1, 1), Cell::Blocked);
    let inside = Position::new(0, 0);
    let blocked = Position::new(1, 1);
    let outside = Position::new(3, 0);
    let negative = Position::new(0, -1);
    let table = preprocess_grid(&grid);

    assert_eq!(
        find_path_dijkstra(&grid, outside, inside),
        Err(SearchError::InvalidStart(outside))
    );
    assert_eq!(
        find_path_best_first(&grid, blocked, inside),
        Err(SearchError::InvalidStart(blocked))
    );
    assert_eq!(
        find_path_astar(&grid, inside, negative),
        Err(SearchError::InvalidGoal(negative))
    );
    assert_eq!(
        find_path_jps(&grid, inside, blocked),
        Err(SearchError::InvalidGoal(blocked))
    );
    assert_eq!(
        find_path_jps_plus(&table, inside, outside),
        Err(SearchError::InvalidGoal(outside))
    );
}

#[test]
fn table_is_a_snapshot() {
    let mut grid = Grid::new(5, 3, Cell::Walkable);
    let table = preprocess_grid(&grid);
    let start = Position::new(1, 0);
    let goal = Position::new(1, 4);
    // Wall off the goal after preprocessing.
    for row in 0..3 {
        grid.set(Position::new(row, 2), Cell::Blocked);
    }

    // The free function keeps answering for the grid the table was built from.
    let result = find_path_jps_plus(&table, start, goal).unwrap();
    assert_eq!(result.cost, Some(4));

    // Searching the mutated grid through the table is refused until it is rebuilt.
    let config = SearchConfig::default();
    assert_eq!(
        JpsPlusSolver::new(&table).get_path_single_goal(&grid, start, goal, &config),
        Err(SearchError::StaleJumpTable)
    );
    let rebuilt = preprocess_grid(&grid);
    assert_eq!(rebuilt, preprocess_grid(&grid));
    assert_ne!(rebuilt, table);
    let result = JpsPlusSolver::new(&rebuilt)
        .get_path_single_goal(&grid, start, goal, &config)
        .unwrap();
    assert_eq!(result.status, SearchStatus::Unreachable);
}

#[test]
fn expansion_limit() {
    let grid = Grid::new(10, 10, Cell::Walkable);
    let config = SearchConfig::default().with_max_expansions(3);
    let result = AstarSolver::new()
        .get_path_single_goal(&grid, Position::new(0, 0), Position::new(9, 9), &config)
        .unwrap();
    assert_eq!(result.status, SearchStatus::ExpansionLimit);
    assert_eq!(result.expanded, 3);
    assert!(result.path.is_empty());
    assert_eq!(result.cost, None);

    // A limit that is not reached changes nothing.
    let config = SearchConfig::default().with_max_expansions(1000);
    let result = DijkstraSolver
        .get_path_single_goal(&grid, Position::new(0, 0), Position::new(9, 9), &config)
        .unwrap();
    assert_eq!(result.cost, Some(18));
}

#[test]
fn traces_are_ordered() {
    let grid: Grid = "\
        ......\n\
        .##.#.\n\
        ...#..\n\
        .#....\n"
        .parse()
        .unwrap();
    let start = Position::new(0, 0);
    let goal = Position::new(3, 5);
    let config = SearchConfig::default().with_trace();
    let table = preprocess_grid(&grid);
    let results = [
        DijkstraSolver.get_path_single_goal(&grid, start, goal, &config),
        BestFirstSolver.get_path_single_goal(&grid, start, goal, &config),
        AstarSolver::new().get_path_single_goal(&grid, start, goal, &config),
        JpsSolver.get_path_single_goal(&grid, start, goal, &config),
        JpsPlusSolver::new(&table).find_path(start, goal, &config),
    ];
    for result in results {
        let trace = result.unwrap().trace.expect("trace was requested");
        assert_eq!(trace[0].position, start);
        assert_eq!(trace[0].kind, TraceKind::Inserted);
        assert!(trace.iter().all(|e| grid.is_walkable(e.position)));
        let last = trace.last().unwrap();
        assert_eq!((last.position, last.kind), (goal, TraceKind::Expanded));
        // Nothing is expanded before it was inserted.
        for (i, event) in trace.iter().enumerate() {
            if event.kind == TraceKind::Expanded {
                assert!(trace[..i]
                    .iter()
                    .any(|e| e.kind == TraceKind::Inserted && e.position == event.position));
            }
        }
    }

    let untraced = find_path_astar(&grid, start, goal).unwrap();
    assert!(untraced.trace.is_none());
}

#[test]
fn components_short_circuit() {
    let grid: Grid = "\
        ..#..\n\
        ..#..\n\
        ..#..\n"
        .parse()
        .unwrap();
    let components = Components::new(&grid);
    let config = SearchConfig::default();
    let start = Position::new(0, 0);

    let result = AstarSolver::new()
        .get_path_with_components(&grid, &components, start, Position::new(2, 4), &config)
        .unwrap();
    assert_eq!(result.status, SearchStatus::Unreachable);
    assert_eq!(result.expanded, 0);
    assert_eq!(result.checks, 0);

    let result = JpsSolver
        .get_path_with_components(&grid, &components, start, Position::new(2, 1), &config)
        .unwrap();
    assert_eq!(result.cost, Some(3));

    assert_eq!(
        DijkstraSolver.get_path_with_components(
            &grid,
            &components,
            start,
            Position::new(1, 2),
            &config
        ),
        Err(SearchError::InvalidGoal(Position::new(1, 2)))
    );
}
