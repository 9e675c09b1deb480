use crate::board::Board;
use crate::types::{Cell, Owner};

pub trait MoveSelector: Send + Sync {
    /// Picks a move for `mover`, or `None` when no empty cell captures anything.
    fn select_move(&self, board: &Board, mover: Owner) -> Option<Cell>;
}

/// Single-ply greedy player: takes the empty cell that captures the most
/// pieces right now.
///
/// Ties go to the cell reached *last* in empty-cell enumeration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, mover: Owner) -> Option<Cell> {
        let mut best: Option<(Cell, usize)> = None;

        for &cell in board.empty_cells() {
            let captures = board.capture_count(cell, mover);
            if captures == 0 {
                continue;
            }
            if best.is_none_or(|(_, max)| captures >= max) {
                best = Some((cell, captures));
            }
        }

        best.map(|(cell, _)| cell)
    }
}
