use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// Snapshot of one grid position.
///
/// The board owns the authoritative copy; values handed out by [`Board`](crate::Board) are
/// copies, so holding on to one never observes later moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: Coord,
    col: Coord,
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mine_count: u8,
}

impl Cell {
    pub(crate) const fn new((row, col): Coord2, is_mine: bool, adjacent_mine_count: u8) -> Self {
        Self {
            row,
            col,
            is_mine,
            is_revealed: false,
            is_flagged: false,
            adjacent_mine_count: if is_mine { 0 } else { adjacent_mine_count },
        }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Number of mines among the up-to-8 neighbors. Always 0 for mines.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    /// Hidden and unflagged, i.e. a cell the flood fill may open.
    pub(crate) const fn is_closed(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Opens the cell. Any flag is dropped, a revealed cell never carries one.
    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
        self.is_flagged = false;
    }

    pub(crate) fn toggle_flag(&mut self) {
        debug_assert!(!self.is_revealed);
        self.is_flagged = !self.is_flagged;
    }
}
