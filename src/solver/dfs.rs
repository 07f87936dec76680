//! Depth-first search: explicit LIFO stack, fully explores one branch
//! before backtracking.

use crate::effect::EffectOutcome;
use crate::error::SolverError;
use crate::solver::MazeSolver;
use grid_util::point::Point;

impl MazeSolver {
    /// Neighbors are pushed in the fixed down, up, right, left order, so
    /// the left neighbor is explored first. A teleport short-circuits
    /// sibling exploration of the origin tile.
    pub(crate) fn solve_dfs(&mut self) -> Result<bool, SolverError> {
        let mut stack: Vec<Point> = Vec::new();
        self.discover(self.start(), None);
        stack.push(self.start());

        while let Some(current) = stack.pop() {
            self.bump_counter();
            if current == self.end() {
                return Ok(true);
            }
            match self.apply_effect(current)? {
                EffectOutcome::Jump(next) => {
                    self.discover(next, Some(current));
                    stack.push(next);
                    continue;
                }
                EffectOutcome::Stay => {}
            }
            for neighbor in self.neighbors(&current) {
                self.discover(neighbor, Some(current));
                stack.push(neighbor);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MazeGrid, MazeSolver, Strategy};

    #[test]
    fn finds_the_gap_around_a_central_wall() {
        let maze = MazeGrid::from_ascii("A  \n # \n  B").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Dfs), Ok(true));
        let path = solver.reconstruct_path().unwrap();
        assert_eq!(path.first(), Some(&solver.start()));
        assert_eq!(path.last(), Some(&solver.end()));
    }

    #[test]
    fn reports_failure_on_a_walled_off_end() {
        let maze = MazeGrid::from_ascii("A#B").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Dfs), Ok(false));
        // Only the start tile was ever processed.
        assert_eq!(solver.counter(), 1);
        assert_eq!(solver.reconstruct_path(), None);
    }
}
