//! The search loop shared by every solver. It is a best-first search parameterised by a
//! successor function and a priority function, similar in spirit to
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! but passing each node's arrival direction to the successor function so that jump point
//! search can prune by it.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;

use crate::config::SearchConfig;
use crate::frontier::{Frontier, FrontierEntry};
use crate::grid::{Direction, Position};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Arena record for one discovered position. The position itself is the arena key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode<C> {
    /// Best known accumulated cost.
    pub g: C,
    /// Heuristic estimate to the goal.
    pub h: C,
    /// Frontier key derived from `g` and `h`.
    pub f: C,
    /// Arena index of the predecessor on the best known route, `None` for the start.
    pub parent: Option<usize>,
    /// Direction of the last move into this position, `None` for the start.
    pub arrival: Option<Direction>,
    pub closed: bool,
}

/// The view of a node handed to a successor function when it is expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit<C> {
    pub position: Position,
    pub g: C,
    pub arrival: Option<Direction>,
}

/// A position reachable from an expanded node, the cost of getting there and the direction
/// travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Successor<C> {
    pub position: Position,
    pub cost: C,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was popped from the frontier.
    Found,
    /// The frontier ran dry before the goal was popped.
    Unreachable,
    /// The configured expansion limit was reached first.
    ExpansionLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceKind {
    /// The node was popped and accepted for expansion.
    Expanded,
    /// The node was pushed onto the frontier.
    Inserted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub position: Position,
    pub kind: TraceKind,
    pub direction: Option<Direction>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathFindResult<C = u32> {
    pub status: SearchStatus,
    /// Positions from start to goal inclusive. Empty unless `status` is [SearchStatus::Found].
    pub path: Vec<Position>,
    /// Accumulated cost of the goal node. `None` unless `status` is [SearchStatus::Found].
    pub cost: Option<C>,
    /// Number of neighbour or jump evaluations performed.
    pub checks: usize,
    /// Number of nodes expanded.
    pub expanded: usize,
    /// Ordered expand/insert events, present when requested through [SearchConfig].
    pub trace: Option<Vec<TraceEvent>>,
}

impl<C> PathFindResult<C> {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    pub(crate) fn not_found(status: SearchStatus) -> PathFindResult<C> {
        PathFindResult {
            status,
            path: Vec::new(),
            cost: None,
            checks: 0,
            expanded: 0,
            trace: None,
        }
    }
}

fn reverse_path<C>(nodes: &FxIndexMap<Position, SearchNode<C>>, last: usize) -> Vec<Position> {
    let mut path: Vec<Position> = std::iter::successors(Some(last), |&i| {
        nodes.get_index(i).and_then(|(_, node)| node.parent)
    })
    .filter_map(|i| nodes.get_index(i).map(|(pos, _)| *pos))
    .collect();
    path.reverse();
    path
}

/// Runs a best-first search from `start` until `goal` is popped or the frontier is exhausted.
///
/// The frontier is ordered by `priority(g, h)`. A popped entry is skipped when its position has
/// already been closed or when a cheaper route to it has been recorded since it was pushed.
/// Successors that are closed, or that do not improve on the recorded cost, are not pushed.
/// The returned path holds the positions of the expanded nodes only; solvers that jump must
/// expand it with [waypoints_to_path](crate::waypoints_to_path).
pub fn best_first_search<C, FN, IN, FH, FP>(
    start: Position,
    goal: Position,
    mut successors: FN,
    mut heuristic: FH,
    mut priority: FP,
    config: &SearchConfig,
) -> PathFindResult<C>
where
    C: Zero + Ord + Copy,
    FN: FnMut(&Visit<C>, &mut usize) -> IN,
    IN: IntoIterator<Item = Successor<C>>,
    FH: FnMut(&Position) -> C,
    FP: FnMut(C, C) -> C,
{
    let mut frontier = Frontier::new();
    let mut nodes: FxIndexMap<Position, SearchNode<C>> = FxIndexMap::default();
    let mut trace = config.record_trace.then(Vec::new);
    let mut checks = 0;
    let mut expanded = 0;

    let h = heuristic(&start);
    let f = priority(Zero::zero(), h);
    nodes.insert(
        start,
        SearchNode {
            g: Zero::zero(),
            h,
            f,
            parent: None,
            arrival: None,
            closed: false,
        },
    );
    frontier.push(FrontierEntry {
        priority: f,
        cost: Zero::zero(),
        index: 0,
    });
    if let Some(t) = trace.as_mut() {
        t.push(TraceEvent {
            position: start,
            kind: TraceKind::Inserted,
            direction: None,
        });
    }

    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop_min() {
        let visit = match nodes.get_index_mut(index) {
            Some((position, node)) => {
                // Duplicate entries are never decreased in place; the best one wins and the
                // rest are dropped here.
                if node.closed || cost > node.g {
                    continue;
                }
                Visit {
                    position: *position,
                    g: node.g,
                    arrival: node.arrival,
                }
            }
            None => continue,
        };
        if visit.position != goal
            && config.max_expansions.is_some_and(|limit| expanded >= limit)
        {
            warn!(
                "Expansion limit of {} hit while searching from {} to {}",
                expanded, start, goal
            );
            return PathFindResult {
                trace,
                checks,
                expanded,
                ..PathFindResult::not_found(SearchStatus::ExpansionLimit)
            };
        }
        if let Some(t) = trace.as_mut() {
            t.push(TraceEvent {
                position: visit.position,
                kind: TraceKind::Expanded,
                direction: visit.arrival,
            });
        }
        if visit.position == goal {
            debug!(
                "Reached {} from {} after {} expansions and {} checks",
                goal, start, expanded, checks
            );
            return PathFindResult {
                status: SearchStatus::Found,
                path: reverse_path(&nodes, index),
                cost: Some(visit.g),
                checks,
                expanded,
                trace,
            };
        }
        if let Some((_, node)) = nodes.get_index_mut(index) {
            node.closed = true;
        }
        expanded += 1;

        for Successor {
            position,
            cost: move_cost,
            direction,
        } in successors(&visit, &mut checks)
        {
            let new_cost = visit.g + move_cost;
            let f;
            let n;
            match nodes.entry(position) {
                Vacant(e) => {
                    let h = heuristic(e.key());
                    f = priority(new_cost, h);
                    n = e.index();
                    e.insert(SearchNode {
                        g: new_cost,
                        h,
                        f,
                        parent: Some(index),
                        arrival: Some(direction),
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    let node = e.get_mut();
                    if node.closed || node.g <= new_cost {
                        continue;
                    }
                    f = priority(new_cost, node.h);
                    node.g = new_cost;
                    node.f = f;
                    node.parent = Some(index);
                    node.arrival = Some(direction);
                    n = e.index();
                }
            }
            frontier.push(FrontierEntry {
                priority: f,
                cost: new_cost,
                index: n,
            });
            if let Some(t) = trace.as_mut() {
                t.push(TraceEvent {
                    position,
                    kind: TraceKind::Inserted,
                    direction: Some(direction),
                });
            }
        }
    }
    warn!("Frontier exhausted: {} is not reachable from {}", goal, start);
    PathFindResult {
        trace,
        checks,
        expanded,
        ..PathFindResult::not_found(SearchStatus::Unreachable)
    }
}
