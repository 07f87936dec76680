//! Transient per-run search state. Created by the solver and cleared by
//! [reset](SearchState::reset) before every run, so the grid itself stays
//! immutable while a strategy executes and no state leaks between runs.

use fxhash::FxBuildHasher;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use indexmap::IndexMap;
use log::warn;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Visited mask, parent back-links and the step counter for one run.
///
/// The parent map preserves insertion order, which is discovery order; the
/// start tile maps to [None]. Each tile gets its parent at first discovery
/// and keeps it unless Dijkstra/A* find a strictly cheaper route through
/// their side maps.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub(crate) visited: BoolGrid,
    parents: FxIndexMap<Point, Option<Point>>,
    counter: i64,
}

impl SearchState {
    pub fn new(width: usize, height: usize) -> SearchState {
        SearchState {
            visited: BoolGrid::new(width, height, false),
            parents: FxIndexMap::default(),
            counter: 0,
        }
    }

    /// Clears visited marks, parent links and the step counter.
    pub fn reset(&mut self) {
        for y in 0..self.visited.height() {
            for x in 0..self.visited.width() {
                self.visited.set(x, y, false);
            }
        }
        self.parents.clear();
        self.counter = 0;
    }

    pub fn is_visited(&self, point: &Point) -> bool {
        self.visited.get(point.x as usize, point.y as usize)
    }

    /// Marks a tile visited and records its parent. Returns the parent so
    /// callers can forward it to an observer.
    pub(crate) fn discover(&mut self, tile: Point, parent: Option<Point>) {
        self.visited.set(tile.x as usize, tile.y as usize, true);
        self.parents.insert(tile, parent);
    }

    /// Reassigns an already-discovered tile's parent (cost relaxation).
    pub(crate) fn reparent(&mut self, tile: Point, parent: Point) {
        self.parents.insert(tile, Some(parent));
    }

    pub fn parent(&self, tile: &Point) -> Option<Point> {
        self.parents.get(tile).copied().flatten()
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub(crate) fn add_to_counter(&mut self, delta: i64) -> i64 {
        self.counter += delta;
        self.counter
    }

    /// Number of tiles discovered so far (insertion order is preserved).
    pub fn discovered(&self) -> usize {
        self.parents.len()
    }

    /// Walks parent links back from `end` and returns the route from
    /// `start` to `end` inclusive, or [None] if `end` was never
    /// discovered. A chain that does not terminate at `start` is an
    /// internal consistency error; it is logged and still returned.
    pub fn reconstruct(&self, start: &Point, end: &Point) -> Option<Vec<Point>> {
        if !self.parents.contains_key(end) {
            return None;
        }
        let mut path: Vec<Point> = itertools::unfold(Some(*end), |frontier| {
            let current = (*frontier)?;
            *frontier = self.parent(&current);
            Some(current)
        })
        .collect();
        path.reverse();
        if path.first() != Some(start) {
            warn!("parent chain from end does not terminate at the start tile");
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_parent_links() {
        let mut state = SearchState::new(3, 1);
        let (a, b, c) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        state.discover(a, None);
        state.discover(b, Some(a));
        state.discover(c, Some(b));
        assert_eq!(state.reconstruct(&a, &c), Some(vec![a, b, c]));
        assert_eq!(state.reconstruct(&a, &a), Some(vec![a]));
    }

    #[test]
    fn reconstruct_of_undiscovered_end_is_none() {
        let state = SearchState::new(2, 2);
        assert_eq!(
            state.reconstruct(&Point::new(0, 0), &Point::new(1, 1)),
            None
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SearchState::new(2, 1);
        let a = Point::new(0, 0);
        state.discover(a, None);
        state.add_to_counter(7);
        state.reset();
        assert!(!state.is_visited(&a));
        assert_eq!(state.discovered(), 0);
        assert_eq!(state.counter(), 0);
    }
}
