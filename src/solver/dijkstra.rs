//! Dijkstra's algorithm with unit edge weights and lazy deletion: a tile
//! may sit in the heap several times with different distances, and stale
//! entries are discarded against a processed set on pop.

use std::collections::BinaryHeap;

use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;

use crate::effect::EffectOutcome;
use crate::error::SolverError;
use crate::solver::frontier::MinCostHolder;
use crate::solver::MazeSolver;

impl MazeSolver {
    /// Every move costs 1, teleport transitions included. A neighbor's
    /// recorded best distance is only relaxed (and its parent reassigned)
    /// on a strict improvement.
    pub(crate) fn solve_dijkstra(&mut self) -> Result<bool, SolverError> {
        let mut frontier: BinaryHeap<MinCostHolder<i64>> = BinaryHeap::new();
        let mut distances: FxHashMap<Point, i64> = FxHashMap::default();
        let mut processed: FxHashSet<Point> = FxHashSet::default();
        let mut seq: usize = 0;

        self.discover(self.start(), None);
        distances.insert(self.start(), 0);
        frontier.push(MinCostHolder::origin(self.start()));

        while let Some(MinCostHolder { cost, tile: current, .. }) = frontier.pop() {
            if !processed.insert(current) {
                continue;
            }
            self.bump_counter();
            if current == self.end() {
                return Ok(true);
            }
            match self.apply_effect(current)? {
                EffectOutcome::Jump(next) => {
                    let next_cost = cost + 1;
                    if distances.get(&next).map_or(true, |&d| next_cost < d) {
                        distances.insert(next, next_cost);
                        self.discover(next, Some(current));
                        seq += 1;
                        frontier.push(MinCostHolder {
                            estimated_cost: next_cost,
                            cost: next_cost,
                            tile: next,
                            seq,
                        });
                    }
                    continue;
                }
                EffectOutcome::Stay => {}
            }
            for neighbor in self.neighbors(&current) {
                if processed.contains(&neighbor) {
                    continue;
                }
                let next_cost = cost + 1;
                if distances.get(&neighbor).map_or(true, |&d| next_cost < d) {
                    distances.insert(neighbor, next_cost);
                    if self.state.is_visited(&neighbor) {
                        self.reparent(neighbor, current);
                    } else {
                        self.discover(neighbor, Some(current));
                    }
                    seq += 1;
                    frontier.push(MinCostHolder {
                        estimated_cost: next_cost,
                        cost: next_cost,
                        tile: neighbor,
                        seq,
                    });
                }
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MazeGrid, MazeSolver, Strategy};

    #[test]
    fn matches_bfs_length_without_teleports() {
        let text = "A # B\n  #  \n     \n ## #\n     ";
        let maze = MazeGrid::from_ascii(text).unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Bfs), Ok(true));
        let bfs_len = solver.reconstruct_path().unwrap().len();
        assert_eq!(solver.solve(Strategy::Dijkstra), Ok(true));
        let dijkstra_len = solver.reconstruct_path().unwrap().len();
        assert_eq!(bfs_len, dijkstra_len);
    }

    #[test]
    fn exhausts_frontier_when_walled_off() {
        let maze = MazeGrid::from_ascii("A #B\n  # ").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Dijkstra), Ok(false));
        // All four tiles on the start side were processed.
        assert_eq!(solver.counter(), 4);
    }
}
