//! Effect resolution for the tile being processed. Applied exactly once
//! per dequeue, before neighbor expansion; a [Jump](EffectOutcome::Jump)
//! replaces neighbor expansion for that dequeue entirely.

use grid_util::point::Point;
use log::debug;
use rand::Rng;

use crate::error::SolverError;
use crate::solver::MazeSolver;
use crate::tile::TileKind;
use crate::COUNTER_EFFECT;

/// What processing a tile does beyond ordinary movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Continue from the same tile: expand its neighbors.
    Stay,
    /// Teleport fired: continue from this tile instead of expanding
    /// the origin's neighbors.
    Jump(Point),
}

impl MazeSolver {
    /// Resolves the special effect of `tile`. Counter tiles adjust the
    /// step counter and stay put; a teleport tile draws a random
    /// destination. The match is exhaustive so a new tile kind cannot be
    /// silently ignored.
    pub(crate) fn apply_effect(&mut self, tile: Point) -> Result<EffectOutcome, SolverError> {
        match self.grid.kind(&tile) {
            TileKind::CounterUp => {
                self.adjust_counter(COUNTER_EFFECT);
                Ok(EffectOutcome::Stay)
            }
            TileKind::CounterDown => {
                self.adjust_counter(-COUNTER_EFFECT);
                Ok(EffectOutcome::Stay)
            }
            TileKind::Teleport => self.random_destination(tile).map(EffectOutcome::Jump),
            TileKind::Empty | TileKind::Wall | TileKind::Start | TileKind::End => {
                Ok(EffectOutcome::Stay)
            }
        }
    }

    /// Draws tiles uniformly at random with replacement until one is
    /// neither a wall nor visited. Bounded by the retry cap: on a grid
    /// whose non-wall tiles are all visited this would otherwise loop
    /// forever, so breaching the cap surfaces as a distinct error.
    fn random_destination(&mut self, origin: Point) -> Result<Point, SolverError> {
        for _ in 0..self.teleport_retry_cap {
            let x = self.rng.gen_range(0..self.grid.width) as i32;
            let y = self.rng.gen_range(0..self.grid.height) as i32;
            let candidate = Point::new(x, y);
            if self.grid.kind(&candidate).walkable() && !self.state.is_visited(&candidate) {
                debug!(
                    "teleport ({}, {}) -> ({}, {})",
                    origin.x, origin.y, candidate.x, candidate.y
                );
                return Ok(candidate);
            }
        }
        Err(SolverError::TeleportExhausted {
            at: origin,
            attempts: self.teleport_retry_cap,
        })
    }
}
