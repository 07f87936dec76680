//! The maze grid: a fixed-size rectangle of [TileKind]s with connected
//! component bookkeeping over the non-wall tiles.

use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::tile::TileKind;
use crate::N_SMALLVEC_SIZE;

/// Neighbor enumeration order: down, up, right, left. This fixed order is
/// the tie-break order for every strategy (it decides DFS stack order and
/// insertion order among equal-priority frontier entries).
pub(crate) const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// [MazeGrid] stores the tile kind of every cell along with a [UnionFind]
/// structure tracking which non-wall cells are connected by ordinary moves.
/// The components are advisory: teleport links are not modeled, so
/// [reachable](Self::reachable) is only authoritative on teleport-free
/// grids. Implements [Grid] over [TileKind].
///
/// Coordinates are [Point]s with `x` as the column and `y` as the row;
/// "down" is `y + 1`.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    kinds: Vec<TileKind>,
    pub width: usize,
    pub height: usize,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl MazeGrid {
    /// Builds a grid from newline-separated rows of tile characters (the
    /// maze text format, see [TileKind::from_char]). Returns [None] on an
    /// unknown character, an empty grid or ragged rows. Components are
    /// generated before returning.
    pub fn from_ascii(s: &str) -> Option<MazeGrid> {
        let lines: Vec<&str> = s.lines().collect();
        let height = lines.len();
        let width = lines.first()?.chars().count();
        if width == 0 || lines.iter().any(|l| l.chars().count() != width) {
            return None;
        }
        let mut grid = MazeGrid::new(width, height, TileKind::Empty);
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                grid.kinds[y * width + x] = TileKind::from_char(c)?;
            }
        }
        grid.generate_components();
        Some(grid)
    }

    fn ix(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub(crate) fn ix_point(&self, point: &Point) -> usize {
        self.ix(point.x as usize, point.y as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Kind of the tile at `point`, which must be in bounds.
    pub fn kind(&self, point: &Point) -> TileKind {
        self.kinds[self.ix_point(point)]
    }

    /// First tile of the given kind in row-major order, if any.
    pub fn find(&self, kind: TileKind) -> Option<Point> {
        self.kinds
            .iter()
            .position(|&k| k == kind)
            .map(|ix| Point::new((ix % self.width) as i32, (ix / self.width) as i32))
    }

    /// In-bounds, non-wall, unvisited neighbors of `point` in the fixed
    /// down, up, right, left order. The unvisited filter is deliberate:
    /// once any strategy has visited a tile its neighbor set is never
    /// re-examined, so no strategy revises a decision after marking a tile
    /// visited. Cheaper-path rediscovery in Dijkstra/A* happens only
    /// through their explicit best-known-cost maps.
    pub fn neighbors(&self, point: &Point, visited: &BoolGrid) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| {
                self.in_bounds(p.x, p.y)
                    && self.kind(p).walkable()
                    && !visited.get(p.x as usize, p.y as usize)
            })
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix_point(point))
    }

    /// Checks if start and goal are on the same component. Ignores
    /// teleport links, so a [false] answer on a grid with teleport tiles
    /// does not rule out a path.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.in_bounds(start.x, start.y)
            && self.in_bounds(goal.x, goal.y)
            && self
                .components
                .equiv(self.ix_point(start), self.ix_point(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if self.get(x, y).walkable() {
                    let parent_ix = self.ix(x, y);
                    // Linking right and down suffices to cover all pairs.
                    for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                        if nx < w && ny < h && self.get(nx, ny).walkable() {
                            self.components.union(parent_ix, self.ix(nx, ny));
                        }
                    }
                }
            }
        }
    }
}

impl Grid<TileKind> for MazeGrid {
    fn new(width: usize, height: usize, default_value: TileKind) -> Self {
        MazeGrid {
            kinds: vec![default_value; width * height],
            width,
            height,
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> TileKind {
        self.kinds[self.ix(x, y)]
    }
    /// Updates a tile kind. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart.
    fn set(&mut self, x: usize, y: usize, value: TileKind) {
        let was_walkable = self.get(x, y).walkable();
        if was_walkable && !value.walkable() {
            self.components_dirty = true;
        } else if !was_walkable && value.walkable() {
            let p = Point::new(x as i32, y as i32);
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let (nx, ny) = (p.x + dx, p.y + dy);
                if self.in_bounds(nx, ny) && self.get(nx as usize, ny as usize).walkable() {
                    self.components
                        .union(self.ix(x, y), self.ix(nx as usize, ny as usize));
                }
            }
        }
        let ix = self.ix(x, y);
        self.kinds[ix] = value;
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_down_up_right_left() {
        let maze = MazeGrid::from_ascii("   \nA  \n  B").unwrap();
        let visited = BoolGrid::new(3, 3, false);
        let center = Point::new(1, 1);
        let neighbors = maze.neighbors(&center, &visited);
        assert_eq!(
            neighbors.to_vec(),
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_visited() {
        let maze = MazeGrid::from_ascii("A# \n  B").unwrap();
        let mut visited = BoolGrid::new(3, 2, false);
        let origin = Point::new(0, 0);
        assert_eq!(
            maze.neighbors(&origin, &visited).to_vec(),
            vec![Point::new(0, 1)]
        );
        visited.set(0, 1, true);
        assert!(maze.neighbors(&origin, &visited).is_empty());
    }

    #[test]
    fn from_ascii_rejects_ragged_and_unknown() {
        assert!(MazeGrid::from_ascii("AB\nA").is_none());
        assert!(MazeGrid::from_ascii("AxB").is_none());
        assert!(MazeGrid::from_ascii("").is_none());
    }

    #[test]
    fn display_round_trips() {
        let text = "A T\n# c\nC B";
        let maze = MazeGrid::from_ascii(text).unwrap();
        assert_eq!(maze.to_string(), format!("{text}\n"));
    }

    #[test]
    fn set_rejoins_components() {
        let mut maze = MazeGrid::from_ascii("A#B").unwrap();
        let (a, b) = (Point::new(0, 0), Point::new(2, 0));
        assert!(!maze.reachable(&a, &b));
        maze.set(1, 0, TileKind::Empty);
        assert!(maze.reachable(&a, &b));
    }
}
