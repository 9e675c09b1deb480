use crate::types::Cell;

/// A player move the engine refused. Engine state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("turns cannot be taken after the game has ended")]
    GameOver,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("row {row}, col {col} is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("you can only play an unoccupied cell (row {}, col {} is taken)", .0.row, .0.col)]
    Occupied(Cell),

    #[error("a move must capture at least one opposing piece (row {}, col {} captures none)", .0.row, .0.col)]
    NoCapture(Cell),
}

/// The caller asked for the computer's move out of turn. This is a contract
/// breach, not player input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    #[error("computer turn was requested after the game ended")]
    GameOver,

    #[error("computer turn was requested during the player's turn")]
    NotComputersTurn,

    #[error("move selector chose row {}, col {}, which captures nothing", .0.row, .0.col)]
    IllegalSelection(Cell),
}

/// Errors building a board from an explicit layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("cell row {row}, col {col} is off the board")]
    OutOfBounds { row: u8, col: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_display() {
        assert_eq!(IllegalMove::NotYourTurn.to_string(), "it is not your turn");
        assert_eq!(
            IllegalMove::Occupied(Cell::new(3, 3)).to_string(),
            "you can only play an unoccupied cell (row 3, col 3 is taken)"
        );
        assert_eq!(
            IllegalMove::NoCapture(Cell::new(0, 0)).to_string(),
            "a move must capture at least one opposing piece (row 0, col 0 captures none)"
        );
    }

    #[test]
    fn protocol_violation_display() {
        assert_eq!(
            ProtocolViolation::NotComputersTurn.to_string(),
            "computer turn was requested during the player's turn"
        );
    }
}
