use serde::{Deserialize, Serialize};

use crate::Cell;

/// Player-visible state of a cell, the form renderers draw from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Hidden,
    Flagged,
    Open(u8),
    /// Mine disclosed when the game ended.
    Mine,
    /// The mine whose reveal lost the game.
    Exploded,
}

impl Tile {
    pub(crate) const fn from_cell(cell: Cell, triggered: bool) -> Self {
        match (cell.is_revealed(), cell.is_mine()) {
            (false, _) if cell.is_flagged() => Self::Flagged,
            (false, _) => Self::Hidden,
            (true, true) if triggered => Self::Exploded,
            (true, true) => Self::Mine,
            (true, false) => Self::Open(cell.adjacent_mine_count()),
        }
    }
}
