//! Tile kinds and their character encoding.

/// The kind of a single maze cell. Closed set: the effect resolver and the
/// dead-end scan match on it exhaustively, so adding a kind is a localized,
/// compile-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Wall,
    Start,
    End,
    Teleport,
    CounterUp,
    CounterDown,
}

impl TileKind {
    /// Decodes the character representation used by the maze text format.
    pub fn from_char(c: char) -> Option<TileKind> {
        match c {
            ' ' => Some(TileKind::Empty),
            '#' => Some(TileKind::Wall),
            'A' => Some(TileKind::Start),
            'B' => Some(TileKind::End),
            'T' => Some(TileKind::Teleport),
            'C' => Some(TileKind::CounterUp),
            'c' => Some(TileKind::CounterDown),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            TileKind::Empty => ' ',
            TileKind::Wall => '#',
            TileKind::Start => 'A',
            TileKind::End => 'B',
            TileKind::Teleport => 'T',
            TileKind::CounterUp => 'C',
            TileKind::CounterDown => 'c',
        }
    }

    pub fn is_wall(self) -> bool {
        self == TileKind::Wall
    }

    /// Walls are the only untraversable kind.
    pub fn walkable(self) -> bool {
        !self.is_wall()
    }
}
