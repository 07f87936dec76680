//! Greedy best-first search: frontier ordered by the Manhattan heuristic
//! alone. Ignores accumulated path cost entirely, so the result is not
//! guaranteed optimal; a discovered tile is committed to its first parent
//! and never relaxed.

use std::collections::BinaryHeap;

use fxhash::FxHashSet;
use grid_util::point::Point;
use num_traits::Zero;

use crate::effect::EffectOutcome;
use crate::error::SolverError;
use crate::solver::frontier::MinCostHolder;
use crate::solver::{manhattan, MazeSolver};

impl MazeSolver {
    pub(crate) fn solve_greedy(&mut self) -> Result<bool, SolverError> {
        let end = self.end();
        let mut frontier: BinaryHeap<MinCostHolder<i64>> = BinaryHeap::new();
        let mut closed: FxHashSet<Point> = FxHashSet::default();
        let mut seq: usize = 0;

        self.discover(self.start(), None);
        frontier.push(MinCostHolder {
            estimated_cost: manhattan(&self.start(), &end),
            cost: Zero::zero(),
            tile: self.start(),
            seq,
        });

        while let Some(MinCostHolder { tile: current, .. }) = frontier.pop() {
            if !closed.insert(current) {
                continue;
            }
            self.bump_counter();
            if current == end {
                return Ok(true);
            }
            match self.apply_effect(current)? {
                EffectOutcome::Jump(next) => {
                    if !closed.contains(&next) {
                        self.discover(next, Some(current));
                        seq += 1;
                        frontier.push(MinCostHolder {
                            estimated_cost: manhattan(&next, &end),
                            cost: Zero::zero(),
                            tile: next,
                            seq,
                        });
                    }
                    continue;
                }
                EffectOutcome::Stay => {}
            }
            for neighbor in self.neighbors(&current) {
                if closed.contains(&neighbor) {
                    continue;
                }
                self.discover(neighbor, Some(current));
                seq += 1;
                frontier.push(MinCostHolder {
                    estimated_cost: manhattan(&neighbor, &end),
                    cost: Zero::zero(),
                    tile: neighbor,
                    seq,
                });
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MazeGrid, MazeSolver, Strategy};

    #[test]
    fn heads_straight_for_the_end_on_an_open_grid() {
        let maze = MazeGrid::from_ascii("A  \n   \n  B").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::GreedyBestFirst), Ok(true));
        let path = solver.reconstruct_path().unwrap();
        // On an unobstructed grid the greedy route is still optimal.
        assert_eq!(path.len(), 5);
        // No detours were taken: one dequeue per path tile.
        assert_eq!(solver.counter(), 5);
    }

    #[test]
    fn finds_a_path_despite_a_misleading_heuristic() {
        // The heuristic pulls toward the wall; greedy must back out of the
        // pocket and still reach the end.
        let text = "A    \n ####\n     \n#### \n    B";
        let maze = MazeGrid::from_ascii(text).unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::GreedyBestFirst), Ok(true));
        let path = solver.reconstruct_path().unwrap();
        assert_eq!(path.first(), Some(&solver.start()));
        assert_eq!(path.last(), Some(&solver.end()));
    }
}
