use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major square index (0..=63). Only meaningful for in-bounds cells.
    pub fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// Steps by `(dr, dc)`; `None` once the walk leaves the board.
    pub(crate) fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(row, col)))
    }
}

/// One of the two sides. Light is the human player, Dark the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Light,
    Dark,
}

impl Owner {
    pub fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// State of a single square as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    #[default]
    Empty,
    Light,
    Dark,
}

impl Tile {
    /// Wire encoding used by [`GameState::board`]: 0=empty, 1=light, 2=dark.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Light => 1,
            Self::Dark => 2,
        }
    }
}

impl From<Owner> for Tile {
    fn from(owner: Owner) -> Self {
        match owner {
            Owner::Light => Self::Light,
            Owner::Dark => Self::Dark,
        }
    }
}

impl From<Option<Owner>> for Tile {
    fn from(owner: Option<Owner>) -> Self {
        owner.map_or(Self::Empty, Self::from)
    }
}

/// Turn/game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Turn {
    LightToMove,
    DarkToMove,
    GameOver,
}

impl Turn {
    pub fn to_move(owner: Owner) -> Self {
        match owner {
            Owner::Light => Self::LightToMove,
            Owner::Dark => Self::DarkToMove,
        }
    }

    /// The side to move, if the game is still running.
    pub fn mover(self) -> Option<Owner> {
        match self {
            Self::LightToMove => Some(Owner::Light),
            Self::DarkToMove => Some(Owner::Dark),
            Self::GameOver => None,
        }
    }
}

/// Live piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub light: u8,
    pub dark: u8,
}

/// An occupied square in a layout snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub row: u8,
    pub col: u8,
    pub owner: Owner,
}

/// Public game state returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// 64 row-major entries, see [`Tile::code`].
    pub board: Vec<u8>,
    pub turn: Turn,
    pub light_count: u8,
    pub dark_count: u8,
    pub is_game_over: bool,
    pub winner: Option<Owner>,
    /// Contract:
    /// - `true` when the side that should have moved after the last
    ///   transition was blocked and passed (forced-pass rules only).
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Contract:
    /// - Move (including one the opponent then had to pass after): every
    ///   cell that changed color, the played cell first.
    /// - Computer reported no move (`Ok(None)`): must be an empty list.
    pub flipped: Vec<Cell>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: Option<Owner>,
    pub light_count: u8,
    pub dark_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_board_edges() {
        assert_eq!(Cell::new(0, 0).offset(-1, 0), None);
        assert_eq!(Cell::new(7, 7).offset(1, 1), None);
        assert_eq!(Cell::new(3, 4).offset(1, -1), Some(Cell::new(4, 3)));
    }

    #[test]
    fn all_cells_are_row_major_and_in_bounds() {
        let cells: Vec<Cell> = Cell::all().collect();

        assert_eq!(cells.len(), NUM_SQUARES);
        assert!(cells.iter().all(|c| c.in_bounds()));
        assert!(cells.iter().enumerate().all(|(i, c)| c.index() == i));
    }

    #[test]
    fn tile_from_owner_never_yields_empty() {
        assert_eq!(Tile::from(Owner::Light), Tile::Light);
        assert_eq!(Tile::from(Owner::Dark), Tile::Dark);
        assert_eq!(Tile::from(None), Tile::Empty);
    }
}
