use core::fmt;

use crate::grid::Position;

/// Reasons a search refuses to run. An unreachable goal is not an error; it is reported through
/// [SearchStatus](crate::SearchStatus).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start lies outside the grid or on a blocked cell.
    InvalidStart(Position),
    /// The goal lies outside the grid or on a blocked cell.
    InvalidGoal(Position),
    /// The jump table was built from a grid other than the one being searched.
    StaleJumpTable,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::InvalidStart(p) => write!(f, "start {p} is out of bounds or blocked"),
            SearchError::InvalidGoal(p) => write!(f, "goal {p} is out of bounds or blocked"),
            SearchError::StaleJumpTable => {
                write!(f, "jump table was built from a different grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}
