//! # maze_pathfinding
//!
//! A maze solving system on a tile grid. A [MazeGrid](maze::MazeGrid) holds
//! tile kinds (walls, start, end and the effect tiles: teleporters and
//! counter modifiers) and a [MazeSolver](solver::MazeSolver) runs one of six
//! interchangeable search strategies over it: depth-first, breadth-first,
//! Dijkstra, A\*, greedy best-first and dead-end filling followed by BFS.
//! Every strategy shares one contract: it resets the per-run search state,
//! counts each processed tile in a step counter, resolves tile effects on
//! dequeue and leaves parent back-links from which the path is rebuilt.
//!
//! Connected components over the non-wall tiles are pre-computed with a
//! [UnionFind](petgraph::unionfind::UnionFind) structure so callers can
//! cheaply pre-screen teleport-free grids for reachability.

pub mod effect;
pub mod error;
pub mod maze;
pub mod observer;
pub mod search_state;
pub mod solver;
pub mod tile;

pub use effect::EffectOutcome;
pub use error::SolverError;
pub use maze::MazeGrid;
pub use observer::ProgressObserver;
pub use solver::{MazeSolver, Strategy};
pub use tile::TileKind;

/// Amount added (CounterUp) or subtracted (CounterDown) from the step
/// counter when a counter tile is processed.
pub const COUNTER_EFFECT: i64 = 50;

/// Default bound on uniform random draws when resolving a teleport tile.
pub const DEFAULT_TELEPORT_RETRY_CAP: usize = 10_000;

/// Inline capacity for neighborhood buffers; a tile has at most 4 neighbors.
pub(crate) const N_SMALLVEC_SIZE: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::grid::Grid;

    #[test]
    fn test_component_generation() {
        let mut maze = MazeGrid::from_ascii("A#B").unwrap();
        let start = maze.find(TileKind::Start).unwrap();
        let end = maze.find(TileKind::End).unwrap();
        assert!(!maze.reachable(&start, &end));
        maze.set(1, 0, TileKind::Empty);
        maze.generate_components();
        assert!(maze.reachable(&start, &end));
    }
}
