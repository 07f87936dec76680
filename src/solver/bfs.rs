//! Breadth-first search: FIFO queue, first dequeue of the end tile is a
//! shortest path in edge-count terms (all edges are unit).

use std::collections::VecDeque;

use crate::effect::EffectOutcome;
use crate::error::SolverError;
use crate::solver::MazeSolver;
use grid_util::point::Point;

impl MazeSolver {
    pub(crate) fn solve_bfs(&mut self) -> Result<bool, SolverError> {
        let mut queue: VecDeque<Point> = VecDeque::new();
        self.discover(self.start(), None);
        queue.push_back(self.start());

        while let Some(current) = queue.pop_front() {
            self.bump_counter();
            if current == self.end() {
                return Ok(true);
            }
            match self.apply_effect(current)? {
                EffectOutcome::Jump(next) => {
                    self.discover(next, Some(current));
                    queue.push_back(next);
                    continue;
                }
                EffectOutcome::Stay => {}
            }
            for neighbor in self.neighbors(&current) {
                self.discover(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MazeGrid, MazeSolver, Strategy};

    #[test]
    fn shortest_path_around_a_central_wall() {
        let maze = MazeGrid::from_ascii("A  \n # \n  B").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Bfs), Ok(true));
        let path = solver.reconstruct_path().unwrap();
        // Start and end included: four moves, five tiles.
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&solver.start()));
        assert_eq!(path.last(), Some(&solver.end()));
    }

    #[test]
    fn straight_corridor() {
        let maze = MazeGrid::from_ascii("A   B").unwrap();
        let mut solver = MazeSolver::with_seed(maze, 0).unwrap();
        assert_eq!(solver.solve(Strategy::Bfs), Ok(true));
        assert_eq!(solver.reconstruct_path().unwrap().len(), 5);
        // Every corridor tile is dequeued once, including the end.
        assert_eq!(solver.counter(), 5);
    }
}
