//! Solver error taxonomy. A search that exhausts its frontier without
//! reaching the end is *not* an error; it is the `Ok(false)` outcome of
//! [solve](crate::solver::MazeSolver::solve).

use core::fmt;

use grid_util::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// The grid contains no start tile; the solver refuses to build.
    MissingStart,
    /// The grid contains no end tile; the solver refuses to build.
    MissingEnd,
    /// A teleport tile could not find an unvisited non-wall destination
    /// within the retry cap. Recoverable at the caller's discretion.
    TeleportExhausted { at: Point, attempts: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::MissingStart => write!(f, "grid has no start tile"),
            SolverError::MissingEnd => write!(f, "grid has no end tile"),
            SolverError::TeleportExhausted { at, attempts } => write!(
                f,
                "teleport at ({}, {}) found no destination in {} attempts",
                at.x, at.y, attempts
            ),
        }
    }
}

impl std::error::Error for SolverError {}
