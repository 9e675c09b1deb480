use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::ai::{GreedySelector, MoveSelector};
use crate::board::Board;
use crate::config::{PassPolicy, Rules};
use crate::error::{IllegalMove, ProtocolViolation};
use crate::types::{Cell, GameResult, GameState, Owner, Score, Turn};

/// The board engine: one live game between the human (light) and the
/// computer (dark).
///
/// Piece counts are kept as running totals updated by each move; they always
/// agree with [`Board::count`].
pub struct OthelloGame {
    board: Board,
    turn: Turn,
    light_count: u8,
    dark_count: u8,
    rules: Rules,
    is_pass: bool,
    flipped: Vec<Cell>,
    selector: Box<dyn MoveSelector>,
}

impl OthelloGame {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::with_selector(rules, Box::new(GreedySelector))
    }

    /// Creates a started game that asks `selector` for the computer's moves.
    pub fn with_selector(rules: Rules, selector: Box<dyn MoveSelector>) -> Self {
        let mut game = Self {
            board: Board::new(),
            turn: Turn::LightToMove,
            light_count: 0,
            dark_count: 0,
            rules,
            is_pass: false,
            flipped: Vec::new(),
            selector,
        };
        game.start_new_game();
        game
    }

    /// Resets to the opening position with light to move.
    /// Returns the occupied cells; every other cell is empty.
    #[instrument(level = "debug", skip(self))]
    pub fn start_new_game(&mut self) -> HashMap<Cell, Owner> {
        self.board = Board::new();
        self.turn = Turn::LightToMove;
        let Score { light, dark } = self.board.count();
        self.light_count = light;
        self.dark_count = dark;
        self.is_pass = false;
        self.flipped.clear();

        info!(pass_policy = ?self.rules.pass_policy, "new game started");
        self.board.occupied().clone()
    }

    /// Plays the human's move at `cell`.
    /// Returns every cell that changed color, `cell` first.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_player_move(&mut self, cell: Cell) -> Result<Vec<Cell>, IllegalMove> {
        match self.turn {
            Turn::GameOver => return Err(IllegalMove::GameOver),
            Turn::DarkToMove => return Err(IllegalMove::NotYourTurn),
            Turn::LightToMove => {}
        }
        if !cell.in_bounds() {
            return Err(IllegalMove::OutOfBounds {
                row: cell.row,
                col: cell.col,
            });
        }
        if !self.board.is_empty(cell) {
            return Err(IllegalMove::Occupied(cell));
        }

        let changed = self.board.place(cell, Owner::Light);
        if changed.is_empty() {
            return Err(IllegalMove::NoCapture(cell));
        }

        self.finish_move(Owner::Light, &changed);
        Ok(changed)
    }

    /// Lets the computer pick and play its move.
    ///
    /// Returns the changed cells with the played cell first, the same order as
    /// for the player's move (captures are not listed before the played cell).
    /// Returns `Ok(None)` when dark has no capturing move; the pass policy then
    /// decides whether the game ends or light moves again.
    #[instrument(level = "debug", skip(self))]
    pub fn compute_computer_move(&mut self) -> Result<Option<Vec<Cell>>, ProtocolViolation> {
        match self.turn {
            Turn::GameOver => return Err(ProtocolViolation::GameOver),
            Turn::LightToMove => return Err(ProtocolViolation::NotComputersTurn),
            Turn::DarkToMove => {}
        }

        let Some(cell) = self.selector.select_move(&self.board, Owner::Dark) else {
            debug!("computer has no capturing move");
            self.flipped.clear();
            self.handle_blocked(Owner::Dark);
            return Ok(None);
        };

        let changed = self.board.place(cell, Owner::Dark);
        if changed.is_empty() {
            return Err(ProtocolViolation::IllegalSelection(cell));
        }

        self.finish_move(Owner::Dark, &changed);
        Ok(Some(changed))
    }

    fn finish_move(&mut self, mover: Owner, changed: &[Cell]) {
        let captures = (changed.len() - 1) as u8;
        match mover {
            Owner::Light => {
                self.light_count += captures + 1;
                self.dark_count -= captures;
            }
            Owner::Dark => {
                self.dark_count += captures + 1;
                self.light_count -= captures;
            }
        }
        debug!(?mover, cell = ?changed[0], captures, "move applied");

        self.is_pass = false;
        self.flipped = changed.to_vec();

        let next = mover.opponent();
        if self.board.has_legal_move(next) {
            self.turn = Turn::to_move(next);
        } else {
            self.handle_blocked(next);
        }
    }

    fn handle_blocked(&mut self, blocked: Owner) {
        match self.rules.pass_policy {
            PassPolicy::EndOnFirstBlock => self.end_game(),
            PassPolicy::ForcedPass => {
                let other = blocked.opponent();
                if self.board.has_legal_move(other) {
                    debug!(?blocked, "side has no legal move and passes");
                    self.is_pass = true;
                    self.turn = Turn::to_move(other);
                } else {
                    self.end_game();
                }
            }
        }
    }

    fn end_game(&mut self) {
        self.turn = Turn::GameOver;
        info!(
            light = self.light_count,
            dark = self.dark_count,
            winner = ?self.winner(),
            "game over"
        );
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_players_turn(&self) -> bool {
        self.turn == Turn::LightToMove
    }

    pub fn is_game_over(&self) -> bool {
        self.turn == Turn::GameOver
    }

    /// The side with strictly more pieces once the game is over.
    /// `None` while the game runs or on a tie.
    pub fn winner(&self) -> Option<Owner> {
        if !self.is_game_over() {
            return None;
        }
        match self.light_count.cmp(&self.dark_count) {
            std::cmp::Ordering::Greater => Some(Owner::Light),
            std::cmp::Ordering::Less => Some(Owner::Dark),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn score(&self) -> Score {
        Score {
            light: self.light_count,
            dark: self.dark_count,
        }
    }

    pub fn light_count(&self) -> u8 {
        self.light_count
    }

    pub fn dark_count(&self) -> u8 {
        self.dark_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Cell> {
        self.turn
            .mover()
            .map(|mover| self.board.legal_moves(mover))
            .unwrap_or_default()
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            light_count: self.light_count,
            dark_count: self.dark_count,
            is_game_over: self.is_game_over(),
            winner: self.winner(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            winner: self.winner(),
            light_count: self.light_count,
            dark_count: self.dark_count,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Turn) {
        let Score { light, dark } = board.count();
        self.board = board;
        self.turn = turn;
        self.light_count = light;
        self.dark_count = dark;
        self.is_pass = false;
        self.flipped.clear();
    }
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new()
    }
}
