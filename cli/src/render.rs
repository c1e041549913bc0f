use std::fmt::Write;

use sweeper_core::{Board, Coord, GameStatus, Tile};

pub fn tile_glyph(tile: Tile) -> char {
    use Tile::*;
    match tile {
        Hidden => '#',
        Flagged => 'F',
        Open(0) => '.',
        Open(count) => char::from(b'0' + count),
        Mine => '*',
        Exploded => 'X',
    }
}

pub fn status_line(board: &Board) -> String {
    let status = match board.status() {
        GameStatus::InProgress => "In progress",
        GameStatus::Won => "You win!",
        GameStatus::Lost => "Game over!",
    };
    format!("Mines left: {}  {}", board.mines_left(), status)
}

fn digits(max_index: Coord) -> usize {
    max_index.to_string().len()
}

/// Draws the board as a text grid with row and column indices.
pub fn render(board: &Board) -> String {
    let (rows, cols) = board.size();
    let row_width = digits(rows.saturating_sub(1));
    let col_width = digits(cols.saturating_sub(1));

    let mut out = String::new();
    // writing into a String never fails
    let _ = writeln!(out, "{}", status_line(board));

    let _ = write!(out, "{:row_width$} ", "");
    for col in 0..cols {
        let _ = write!(out, " {col:>col_width$}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>row_width$} ");
        for col in 0..cols {
            let glyph = board
                .tile_at((row, col))
                .map(tile_glyph)
                .unwrap_or('?');
            let _ = write!(out, " {glyph:>col_width$}");
        }
        out.push('\n');
    }

    out
}
