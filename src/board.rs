use std::collections::HashMap;
use std::iter;

use crate::direction::Direction;
use crate::error::LayoutError;
use crate::types::{Cell, NUM_SQUARES, Owner, Score, Tile};

/// Outcome of walking away from a candidate move in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Reached a cell of the mover after `n` opposing cells; those `n` are captured.
    Closed(u8),
    /// Ran off the board without meeting the mover's own color.
    Open,
    /// Hit an empty cell before any anchor.
    BlockedByEmpty,
}

impl Line {
    pub fn captures(self) -> u8 {
        match self {
            Self::Closed(n) => n,
            Self::Open | Self::BlockedByEmpty => 0,
        }
    }
}

/// Othello board state.
///
/// Only occupied cells are stored; a cell missing from the map is empty.
/// `empty` mirrors the complement of the map's keys in row-major order and
/// drives move enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    occupied: HashMap<Cell, Owner>,
    empty: Vec<Cell>,
}

impl Board {
    /// Creates the opening position:
    /// (3,3) and (4,4) light, (3,4) and (4,3) dark.
    pub fn new() -> Self {
        let occupied = HashMap::from([
            (Cell::new(3, 3), Owner::Light),
            (Cell::new(4, 4), Owner::Light),
            (Cell::new(3, 4), Owner::Dark),
            (Cell::new(4, 3), Owner::Dark),
        ]);
        Self::with_occupied(occupied)
    }

    /// Builds an arbitrary position. Later entries win on duplicate cells.
    pub fn from_cells<I>(cells: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (Cell, Owner)>,
    {
        let mut occupied = HashMap::new();
        for (cell, owner) in cells {
            if !cell.in_bounds() {
                return Err(LayoutError::OutOfBounds {
                    row: cell.row,
                    col: cell.col,
                });
            }
            occupied.insert(cell, owner);
        }
        Ok(Self::with_occupied(occupied))
    }

    fn with_occupied(occupied: HashMap<Cell, Owner>) -> Self {
        let empty = Cell::all().filter(|c| !occupied.contains_key(c)).collect();
        Self { occupied, empty }
    }

    pub fn tile(&self, cell: Cell) -> Tile {
        Tile::from(self.occupied.get(&cell).copied())
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        cell.in_bounds() && !self.occupied.contains_key(&cell)
    }

    /// Occupied cells and their owners.
    pub fn occupied(&self) -> &HashMap<Cell, Owner> {
        &self.occupied
    }

    /// Empty cells in enumeration (row-major) order.
    pub fn empty_cells(&self) -> &[Cell] {
        &self.empty
    }

    pub fn empty_count(&self) -> u8 {
        self.empty.len() as u8
    }

    /// Counts pieces per owner by scanning the occupied map.
    pub fn count(&self) -> Score {
        let light = self
            .occupied
            .values()
            .filter(|&&owner| owner == Owner::Light)
            .count() as u8;
        Score {
            light,
            dark: self.occupied.len() as u8 - light,
        }
    }

    /// Walks from `from` (exclusive) in `dir` and classifies the run for `mover`.
    pub fn scan(&self, from: Cell, dir: Direction, mover: Owner) -> Line {
        let (dr, dc) = dir.delta();
        let mut run = 0u8;
        let mut cursor = from;

        loop {
            let Some(next) = cursor.offset(dr, dc) else {
                return Line::Open;
            };
            match self.occupied.get(&next) {
                None => return Line::BlockedByEmpty,
                Some(&owner) if owner == mover => return Line::Closed(run),
                Some(_) => run += 1,
            }
            cursor = next;
        }
    }

    /// Number of opposing pieces `mover` would capture by playing `cell`.
    /// The played cell itself is not counted. Occupied or off-board cells capture nothing.
    pub fn capture_count(&self, cell: Cell, mover: Owner) -> usize {
        if !self.is_empty(cell) {
            return 0;
        }

        Direction::ALL
            .iter()
            .map(|&dir| self.scan(cell, dir, mover).captures() as usize)
            .sum()
    }

    /// The cells `mover` would capture by playing `cell`, grouped by direction
    /// in [`Direction::ALL`] order. Always `capture_count` long.
    pub fn captured_cells(&self, cell: Cell, mover: Owner) -> Vec<Cell> {
        if !self.is_empty(cell) {
            return Vec::new();
        }

        let mut captured = Vec::new();
        for dir in Direction::ALL {
            let n = self.scan(cell, dir, mover).captures() as usize;
            let (dr, dc) = dir.delta();
            captured.extend(iter::successors(cell.offset(dr, dc), |c| c.offset(dr, dc)).take(n));
        }
        captured
    }

    pub fn is_legal(&self, cell: Cell, mover: Owner) -> bool {
        self.capture_count(cell, mover) > 0
    }

    /// Legal moves for `mover` in empty-cell enumeration order.
    pub fn legal_moves(&self, mover: Owner) -> Vec<Cell> {
        self.empty
            .iter()
            .copied()
            .filter(|&cell| self.is_legal(cell, mover))
            .collect()
    }

    pub fn has_legal_move(&self, mover: Owner) -> bool {
        self.empty.iter().any(|&cell| self.is_legal(cell, mover))
    }

    /// Places one stone and flips captured stones.
    /// Returns every cell that changed color, the played cell first.
    /// Returns an empty list and leaves the board untouched when the move is illegal.
    pub fn place(&mut self, cell: Cell, mover: Owner) -> Vec<Cell> {
        let captured = self.captured_cells(cell, mover);
        if captured.is_empty() {
            return Vec::new();
        }

        let mut changed = Vec::with_capacity(captured.len() + 1);
        changed.push(cell);
        changed.extend(captured);

        for &c in &changed {
            self.occupied.insert(c, mover);
        }
        self.empty.retain(|&c| c != cell);

        changed
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=light, 2=dark.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (&cell, &owner) in &self.occupied {
            board[cell.index()] = Tile::from(owner).code();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn opening_has_four_center_tiles_and_sixty_empty_cells() {
        let board = Board::new();

        assert_eq!(board.tile(cell(3, 3)), Tile::Light);
        assert_eq!(board.tile(cell(4, 4)), Tile::Light);
        assert_eq!(board.tile(cell(3, 4)), Tile::Dark);
        assert_eq!(board.tile(cell(4, 3)), Tile::Dark);
        assert_eq!(board.count(), Score { light: 2, dark: 2 });
        assert_eq!(board.empty_count(), 60);
        assert!(!board.empty_cells().contains(&cell(3, 3)));
    }

    #[test]
    fn initial_light_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        assert_eq!(
            board.legal_moves(Owner::Light),
            vec![cell(2, 4), cell(3, 5), cell(4, 2), cell(5, 3)]
        );
    }

    #[test]
    fn scan_classifies_closed_open_and_blocked_lines() {
        let board = Board::from_cells([
            (cell(0, 1), Owner::Dark),
            (cell(0, 2), Owner::Dark),
            (cell(0, 3), Owner::Light),
            (cell(1, 0), Owner::Dark),
            (cell(2, 0), Owner::Dark),
            (cell(1, 1), Owner::Dark),
        ])
        .unwrap();
        let from = cell(0, 0);

        assert_eq!(board.scan(from, Direction::East, Owner::Light), Line::Closed(2));
        assert_eq!(board.scan(from, Direction::South, Owner::Light), Line::BlockedByEmpty);
        assert_eq!(board.scan(from, Direction::SouthEast, Owner::Light), Line::BlockedByEmpty);
        assert_eq!(board.scan(from, Direction::North, Owner::Light), Line::Open);
    }

    #[test]
    fn line_running_off_the_edge_captures_nothing() {
        let board = Board::from_cells((1..8).map(|col| (cell(0, col), Owner::Dark))).unwrap();

        assert_eq!(board.scan(cell(0, 0), Direction::East, Owner::Light), Line::Open);
        assert_eq!(board.capture_count(cell(0, 0), Owner::Light), 0);
    }

    #[test]
    fn adjacent_own_piece_closes_with_zero_captures() {
        let board = Board::new();

        // South of (2,3) is light (3,3) straight away.
        assert_eq!(
            board.scan(cell(2, 3), Direction::South, Owner::Light),
            Line::Closed(0)
        );
        assert!(!board.is_legal(cell(2, 3), Owner::Light));
    }

    #[test]
    fn captured_cells_length_matches_capture_count() {
        let board = Board::from_cells([
            (cell(3, 3), Owner::Light),
            (cell(3, 4), Owner::Dark),
            (cell(3, 5), Owner::Dark),
            (cell(4, 3), Owner::Dark),
            (cell(5, 3), Owner::Dark),
            (cell(6, 3), Owner::Light),
            (cell(3, 6), Owner::Light),
            (cell(4, 4), Owner::Dark),
            (cell(5, 5), Owner::Light),
        ])
        .unwrap();

        for &c in board.empty_cells() {
            for mover in [Owner::Light, Owner::Dark] {
                assert_eq!(
                    board.captured_cells(c, mover).len(),
                    board.capture_count(c, mover)
                );
            }
        }
        assert_eq!(board.capture_count(cell(2, 3), Owner::Light), 0);
        assert_eq!(board.capture_count(cell(3, 2), Owner::Dark), 1);
    }

    #[test]
    fn place_flips_captured_stones_and_updates_empty_cache() {
        let mut board = Board::new();

        let changed = board.place(cell(2, 4), Owner::Light);

        assert_eq!(changed, vec![cell(2, 4), cell(3, 4)]);
        assert_eq!(board.count(), Score { light: 4, dark: 1 });
        assert_eq!(board.empty_count(), 59);
        assert!(!board.empty_cells().contains(&cell(2, 4)));

        let cells = board.to_array();
        assert_eq!(cells[cell(2, 4).index()], 1);
        assert_eq!(cells[cell(3, 4).index()], 1);
        assert_eq!(cells[cell(4, 3).index()], 2);
    }

    #[test]
    fn illegal_place_returns_empty_and_keeps_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(board.place(cell(0, 0), Owner::Light).is_empty());
        assert!(board.place(cell(3, 3), Owner::Dark).is_empty());
        assert!(board.place(cell(8, 0), Owner::Dark).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn from_cells_rejects_out_of_bounds() {
        let err = Board::from_cells([(cell(8, 2), Owner::Light)]).unwrap_err();

        assert_eq!(err, LayoutError::OutOfBounds { row: 8, col: 2 });
    }

    #[test]
    fn empty_cache_is_complement_of_occupied() {
        let mut board = Board::new();
        board.place(cell(2, 4), Owner::Light);
        board.place(cell(2, 3), Owner::Dark);

        for c in Cell::all() {
            assert_ne!(
                board.occupied().contains_key(&c),
                board.empty_cells().contains(&c)
            );
        }
    }
}
