//! The search engine: one [MazeSolver] bound to a grid, six strategies
//! sharing a single contract. Each strategy lives in its own file as an
//! `impl MazeSolver` block; this module holds construction, the solve
//! dispatch and the bookkeeping helpers every strategy funnels through.

use grid_util::point::Point;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

use crate::error::SolverError;
use crate::maze::MazeGrid;
use crate::observer::ProgressObserver;
use crate::search_state::SearchState;
use crate::tile::TileKind;
use crate::{DEFAULT_TELEPORT_RETRY_CAP, N_SMALLVEC_SIZE};

mod astar;
mod bfs;
mod dead_end;
mod dfs;
mod dijkstra;
pub(crate) mod frontier;
mod greedy;

/// The interchangeable search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
    GreedyBestFirst,
    DeadEndFill,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Dfs,
        Strategy::Bfs,
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
        Strategy::DeadEndFill,
    ];
}

/// Owns a [MazeGrid] and transient per-run [SearchState], and runs one
/// strategy at a time over it. Construction refuses grids without a start
/// or end tile. Not meant to be shared between threads: a solve mutates
/// the run state without synchronization.
pub struct MazeSolver {
    pub grid: MazeGrid,
    pub(crate) state: SearchState,
    pub(crate) rng: StdRng,
    /// Bound on random draws per teleport resolution.
    pub teleport_retry_cap: usize,
    start: Point,
    end: Point,
    observer: Option<Box<dyn ProgressObserver>>,
}

impl MazeSolver {
    /// Builds a solver for `grid`, locating its start and end tiles.
    pub fn new(grid: MazeGrid) -> Result<MazeSolver, SolverError> {
        Self::build(grid, StdRng::from_entropy())
    }

    /// Like [new](Self::new) but with a seeded RNG so teleport draws (and
    /// therefore whole runs) are reproducible.
    pub fn with_seed(grid: MazeGrid, seed: u64) -> Result<MazeSolver, SolverError> {
        Self::build(grid, StdRng::seed_from_u64(seed))
    }

    fn build(grid: MazeGrid, rng: StdRng) -> Result<MazeSolver, SolverError> {
        let start = grid.find(TileKind::Start).ok_or(SolverError::MissingStart)?;
        let end = grid.find(TileKind::End).ok_or(SolverError::MissingEnd)?;
        let state = SearchState::new(grid.width, grid.height);
        Ok(MazeSolver {
            grid,
            state,
            rng,
            teleport_retry_cap: DEFAULT_TELEPORT_RETRY_CAP,
            start,
            end,
            observer: None,
        })
    }

    /// Installs a progress observer. The solver works identically without
    /// one; hooks are fired after every counter change and every
    /// visited/parent mutation.
    pub fn set_observer(&mut self, observer: Box<dyn ProgressObserver>) {
        self.observer = Some(observer);
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The step counter: authoritative after a completed run, readable at
    /// any time. Ordinary processing adds 1 per tile; counter tiles add or
    /// subtract [COUNTER_EFFECT](crate::COUNTER_EFFECT), so it can go
    /// negative.
    pub fn counter(&self) -> i64 {
        self.state.counter()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Runs one strategy to completion. `Ok(true)` the first time the end
    /// tile is dequeued, `Ok(false)` on frontier exhaustion; a teleport
    /// that cannot place itself is an error. Resets all per-run state
    /// first, so consecutive solves are independent.
    pub fn solve(&mut self, strategy: Strategy) -> Result<bool, SolverError> {
        self.reset();
        info!("solving {}x{} maze with {:?}", self.grid.width, self.grid.height, strategy);
        let found = match strategy {
            Strategy::Dfs => self.solve_dfs(),
            Strategy::Bfs => self.solve_bfs(),
            Strategy::Dijkstra => self.solve_dijkstra(),
            Strategy::AStar => self.solve_astar(),
            Strategy::GreedyBestFirst => self.solve_greedy(),
            Strategy::DeadEndFill => self.solve_dead_end_fill(),
        }?;
        let counter = self.state.counter();
        info!("{:?} finished: found={}, counter={}", strategy, found, counter);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_finished(found, counter);
        }
        Ok(found)
    }

    /// The route from start to end inclusive, rebuilt from parent links.
    /// Only meaningful after a solve that returned `Ok(true)`.
    pub fn reconstruct_path(&self) -> Option<Vec<Point>> {
        self.state.reconstruct(&self.start, &self.end)
    }

    /// Clears visited marks, parent links and the counter before a run.
    pub fn reset(&mut self) {
        self.state.reset();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_counter(0);
        }
    }

    /// Unvisited walkable neighbors of `point` in down, up, right, left
    /// order (see [MazeGrid::neighbors]).
    pub(crate) fn neighbors(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        self.grid.neighbors(point, &self.state.visited)
    }

    /// One tile dequeued and processed.
    pub(crate) fn bump_counter(&mut self) {
        let value = self.state.add_to_counter(1);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_counter(value);
        }
    }

    /// Counter-tile adjustment; `delta` may be negative.
    pub(crate) fn adjust_counter(&mut self, delta: i64) {
        let value = self.state.add_to_counter(delta);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_counter(value);
        }
    }

    /// Marks a tile visited with its parent back-link at first discovery.
    pub(crate) fn discover(&mut self, tile: Point, parent: Option<Point>) {
        self.state.discover(tile, parent);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_discover(tile, parent);
        }
    }

    /// Reassigns a discovered tile's parent after a strict cost
    /// improvement (Dijkstra/A* relaxation).
    pub(crate) fn reparent(&mut self, tile: Point, parent: Point) {
        self.state.reparent(tile, parent);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_discover(tile, Some(parent));
        }
    }

    pub(crate) fn note_dead_end(&mut self, tile: Point) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_dead_end(tile);
        }
    }
}

/// Manhattan distance, the A*/greedy heuristic. Admissible and consistent
/// here because all edges cost 1 and there are no diagonal moves.
pub(crate) fn manhattan(a: &Point, b: &Point) -> i64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;

    #[test]
    fn construction_requires_start_and_end() {
        let no_start = MazeGrid::from_ascii("  B").unwrap();
        assert_eq!(
            MazeSolver::new(no_start).err(),
            Some(SolverError::MissingStart)
        );
        let no_end = MazeGrid::from_ascii("A  ").unwrap();
        assert_eq!(MazeSolver::new(no_end).err(), Some(SolverError::MissingEnd));
        let ok = MazeGrid::from_ascii("A B").unwrap();
        let solver = MazeSolver::new(ok).unwrap();
        assert_eq!(solver.start(), Point::new(0, 0));
        assert_eq!(solver.end(), Point::new(2, 0));
        assert_eq!(solver.grid.kind(&solver.start()), TileKind::Start);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(&Point::new(0, 0), &Point::new(2, 3)), 5);
        assert_eq!(manhattan(&Point::new(2, 3), &Point::new(0, 0)), 5);
        assert_eq!(manhattan(&Point::new(1, 1), &Point::new(1, 1)), 0);
    }
}
