//! A* with the Manhattan heuristic. Admissible and consistent here since
//! every edge costs 1 and there are no diagonal moves, so the first
//! dequeue of the end tile carries an optimal g on teleport-free grids.

use std::collections::BinaryHeap;

use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;

use crate::effect::EffectOutcome;
use crate::error::SolverError;
use crate::solver::frontier::MinCostHolder;
use crate::solver::{manhattan, MazeSolver};

impl MazeSolver {
    /// Frontier keyed by `g + h`; re-expansion is guarded by a closed set
    /// plus a strict g-improvement check on the side map.
    pub(crate) fn solve_astar(&mut self) -> Result<bool, SolverError> {
        let end = self.end();
        let mut frontier: BinaryHeap<MinCostHolder<i64>> = BinaryHeap::new();
        let mut g_score: FxHashMap<Point, i64> = FxHashMap::default();
        let mut closed: FxHashSet<Point> = FxHashSet::default();
        let mut seq: usize = 0;

        self.discover(self.start(), None);
        g_score.insert(self.start(), 0);
        frontier.push(MinCostHolder {
            estimated_cost: manhattan(&self.start(), &end),
            cost: 0,
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
            let current_g = g_score[&current];
            match self.apply_effect(current)? {
                EffectOutcome::Jump(next) => {
                    let tentative_g = current_g + 1;
                    if !closed.contains(&next)
                        && g_score.get(&next).map_or(true, |&g| tentative_g < g)
                    {
                        g_score.insert(next, tentative_g);
                        self.discover(next, Some(current));
                        seq += 1;
                        frontier.push(MinCostHolder {
                            estimated_cost: tentative_g + manhattan(&next, &end),
                            cost: tentative_g,
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
                let tentative_g = current_g + 1;
                if g_score.get(&neighbor).map_or(true, |&g| tentative_g < g) {
                    g_score.insert(neighbor, tentative_g);
                    if self.state.is_visited(&neighbor) {
                        self.reparent(neighbor, current);
                    } else {
                        self.discover(neighbor, Some(current));
                    }
                    seq += 1;
                    frontier.push(MinCostHolder {
                        estimated_cost: tentative_g + manhattan(&neighbor, &end),
                        cost: tentative_g,
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
    fn path_is_no_longer_than_bfs() {
        let text = "A    \n ### \n   # \n # # \n#   B";
        let maze = MazeGrid::from_ascii(text).unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Bfs), Ok(true));
        let bfs_len = solver.reconstruct_path().unwrap().len();
        assert_eq!(solver.solve(Strategy::AStar), Ok(true));
        let astar_len = solver.reconstruct_path().unwrap().len();
        assert_eq!(astar_len, bfs_len);
    }

    #[test]
    fn open_grid_path_has_manhattan_length() {
        let maze = MazeGrid::from_ascii("A  \n   \n  B").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::AStar), Ok(true));
        // Four unit moves, five tiles including both endpoints.
        assert_eq!(solver.reconstruct_path().unwrap().len(), 5);
    }
}
