//! Dead-end filling: iteratively prove tiles dead until a fixed point,
//! then breadth-first search the simplified maze. The dead mask is a
//! fresh [BoolGrid] per run and is discarded afterwards.

use std::collections::VecDeque;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;

use crate::effect::EffectOutcome;
use crate::error::SolverError;
use crate::maze::NEIGHBOR_OFFSETS;
use crate::solver::MazeSolver;
use crate::tile::TileKind;

impl MazeSolver {
    /// Scan phase: any tile that is not a wall, start or end and has at
    /// most one live (walkable, non-dead) neighbor is marked dead; the
    /// scan repeats until a pass marks nothing. Each newly marked tile
    /// counts one step. BFS phase: ordinary BFS that never enters dead
    /// tiles; teleport landings on dead tiles are dropped. A maze whose
    /// start or end is sealed off once dead ends are removed reports no
    /// path.
    pub(crate) fn solve_dead_end_fill(&mut self) -> Result<bool, SolverError> {
        let mut dead = BoolGrid::new(self.grid.width, self.grid.height, false);

        let mut marked_any = true;
        while marked_any {
            marked_any = false;
            for y in 0..self.grid.height {
                for x in 0..self.grid.width {
                    if dead.get(x, y) {
                        continue;
                    }
                    let tile = Point::new(x as i32, y as i32);
                    if matches!(
                        self.grid.kind(&tile),
                        TileKind::Wall | TileKind::Start | TileKind::End
                    ) {
                        continue;
                    }
                    if self.live_neighbor_count(&tile, &dead) <= 1 {
                        dead.set(x, y, true);
                        marked_any = true;
                        self.bump_counter();
                        self.note_dead_end(tile);
                    }
                }
            }
        }

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
                    if !dead.get(next.x as usize, next.y as usize) {
                        self.discover(next, Some(current));
                        queue.push_back(next);
                    }
                    continue;
                }
                EffectOutcome::Stay => {}
            }
            for neighbor in self.neighbors(&current) {
                if dead.get(neighbor.x as usize, neighbor.y as usize) {
                    continue;
                }
                self.discover(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
        Ok(false)
    }

    /// Walkable neighbors of `tile` not yet proven dead.
    fn live_neighbor_count(&self, tile: &Point, dead: &BoolGrid) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(tile.x + dx, tile.y + dy))
            .filter(|p| {
                self.grid.in_bounds(p.x, p.y)
                    && self.grid.kind(p).walkable()
                    && !dead.get(p.x as usize, p.y as usize)
            })
            .count()
    }
}
