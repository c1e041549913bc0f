use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a reveal, as seen by the caller deciding what to do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continue,
    Loss,
    Win,
}

impl From<GameStatus> for RevealOutcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Self::Continue,
            GameStatus::Won => Self::Win,
            GameStatus::Lost => Self::Loss,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    /// Cells that changed, in the order they were revealed, each listed once.
    pub changed: Vec<Cell>,
}

impl RevealResult {
    fn unchanged(outcome: RevealOutcome) -> Self {
        Self {
            outcome,
            changed: Vec::new(),
        }
    }

    /// Whether this outcome could have caused an update to the board
    pub fn has_update(&self) -> bool {
        !self.changed.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagResult {
    pub changed: Option<Cell>,
}

impl FlagResult {
    pub const fn has_update(&self) -> bool {
        self.changed.is_some()
    }
}

/// Represents a game from start to finish
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Starts a game with randomly placed mines.
    pub fn new_game(rows: Coord, cols: Coord, mine_count: CellCount) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mine_count)?;
        Self::with_generator(config, RandomMineGenerator::from_entropy())
    }

    /// Starts a game with mines placed by `generator`. `config` is validated first since its
    /// fields are public.
    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_layout(generator.generate(config)))
    }

    /// Builds the board over a fixed layout, computing every adjacency count once.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let is_mine = layout.contains_mine(coords);
            let count = if is_mine {
                0
            } else {
                layout.adjacent_mine_count(coords)
            };
            Cell::new(coords, is_mine, count)
        });

        log::debug!(
            "New game on a {}x{} board with {} mines",
            size.0,
            size.1,
            layout.mine_count()
        );

        Self {
            cells,
            mine_count: layout.mine_count(),
            revealed_count: 0,
            flagged_count: 0,
            status: GameStatus::InProgress,
            triggered_mine: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig {
            rows,
            cols,
            mines: self.mine_count,
        }
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet. Negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flagged_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let cell = self.cell_at(coords)?;
        Ok(Tile::from_cell(cell, self.triggered_mine == Some(coords)))
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Full scan: every safe cell is open and the player never opened a mine.
    ///
    /// Mines disclosed after a win do not count as opened by the player.
    pub fn check_win(&self) -> bool {
        self.triggered_mine.is_none()
            && self
                .cells
                .iter()
                .all(|cell| cell.is_mine() || cell.is_revealed())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagResult> {
        if self.status.is_terminal() {
            return Ok(FlagResult { changed: None });
        }
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed() {
            return Ok(FlagResult { changed: None });
        }

        cell.toggle_flag();
        if cell.is_flagged() {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        log::trace!("Flag at {:?} set to {}", coords, cell.is_flagged());

        Ok(FlagResult {
            changed: Some(*cell),
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        if self.status.is_terminal() {
            return Ok(RevealResult::unchanged(self.status.into()));
        }
        let coords = self.validate_coords(coords)?;

        let cell = self.cells[coords.to_nd_index()];
        if !cell.is_closed() {
            return Ok(RevealResult::unchanged(RevealOutcome::Continue));
        }

        let mut changed = Vec::new();

        if cell.is_mine() {
            self.open_cell(coords, &mut changed);
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost, &mut changed);
            return Ok(self.finish(RevealOutcome::Loss, changed));
        }

        self.flood_reveal(coords, &mut changed);

        if self.revealed_count == self.config().safe_cells() {
            debug_assert!(self.check_win());
            self.end_game(GameStatus::Won, &mut changed);
            Ok(self.finish(RevealOutcome::Win, changed))
        } else {
            Ok(self.finish(RevealOutcome::Continue, changed))
        }
    }

    /// Opens `start` and, through zero-count cells, every connected closed cell.
    ///
    /// Uses an explicit stack so the depth is bounded by the board, not the call stack. A cell is
    /// pushed at most once; flagged cells are never pushed.
    fn flood_reveal(&mut self, start: Coord2, changed: &mut Vec<Coord2>) {
        self.open_cell(start, changed);
        if self.cells[start.to_nd_index()].adjacent_mine_count() != 0 {
            return;
        }

        let mut visited: Array2<bool> = Array2::default(self.cells.dim());
        visited[start.to_nd_index()] = true;
        let mut to_visit: Vec<Coord2> = self
            .cells
            .iter_neighbors(start)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_closed())
            .collect();
        for &pos in &to_visit {
            visited[pos.to_nd_index()] = true;
        }

        while let Some(visit_coords) = to_visit.pop() {
            self.open_cell(visit_coords, changed);

            let count = self.cells[visit_coords.to_nd_index()].adjacent_mine_count();
            log::trace!("Flood opened {:?}, adjacent mines: {}", visit_coords, count);
            if count != 0 {
                continue;
            }

            for pos in self.cells.iter_neighbors(visit_coords) {
                if !visited[pos.to_nd_index()] && self.cells[pos.to_nd_index()].is_closed() {
                    visited[pos.to_nd_index()] = true;
                    to_visit.push(pos);
                }
            }
        }
    }

    fn open_cell(&mut self, coords: Coord2, changed: &mut Vec<Coord2>) {
        let cell = &mut self.cells[coords.to_nd_index()];
        debug_assert!(!cell.is_revealed());

        if cell.is_flagged() {
            self.flagged_count -= 1;
        }
        cell.reveal();
        if !cell.is_mine() {
            self.revealed_count += 1;
        }
        changed.push(coords);
    }

    /// Enters a terminal status and discloses every mine, flagged or not.
    fn end_game(&mut self, status: GameStatus, changed: &mut Vec<Coord2>) {
        debug_assert!(status.is_terminal());
        self.status = status;

        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let cell = self.cells[(row, col).to_nd_index()];
                if cell.is_mine() && !cell.is_revealed() {
                    self.open_cell((row, col), changed);
                }
            }
        }

        log::debug!(
            "Game ended: {:?}, revealed {} of {} safe cells",
            status,
            self.revealed_count,
            self.config().safe_cells()
        );
    }

    /// Snapshots the changed cells once the whole move has been applied.
    fn finish(&self, outcome: RevealOutcome, changed: Vec<Coord2>) -> RevealResult {
        RevealResult {
            outcome,
            changed: changed
                .into_iter()
                .map(|coords| self.cells[coords.to_nd_index()])
                .collect(),
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    fn revealed_coords(result: &RevealResult) -> Vec<Coord2> {
        result.changed.iter().map(Cell::coords).collect()
    }

    #[test]
    fn new_game_rejects_invalid_configurations() {
        assert!(matches!(
            Board::new_game(0, 5, 1),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new_game(5, 0, 0),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new_game(5, 5, 25),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn with_generator_rejects_unvalidated_config() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            mines: 10,
        };

        assert_eq!(
            Board::with_generator(config, RandomMineGenerator::new(1)),
            Err(GameError::InvalidConfiguration {
                rows: 3,
                cols: 3,
                mines: 10
            })
        );
        let empty = GameConfig {
            rows: 0,
            cols: 4,
            mines: 0,
        };
        assert!(Board::with_generator(empty, RandomMineGenerator::new(1)).is_err());
    }

    fn brute_force_count(board: &Board, (row, col): Coord2) -> u8 {
        let (rows, cols) = board.size();
        let (row, col) = (i32::from(row), i32::from(col));
        let mut count = 0;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                let (r, c) = (row + d_row, col + d_col);
                if (d_row, d_col) == (0, 0)
                    || r < 0
                    || c < 0
                    || r >= i32::from(rows)
                    || c >= i32::from(cols)
                {
                    continue;
                }
                if board.cell_at((r as Coord, c as Coord)).unwrap().is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn new_game_places_mines_and_counts_neighbors() {
        let configs = [
            (1, 1, 0),
            (1, 9, 0),
            (1, 9, 4),
            (9, 1, 8),
            (2, 2, 3),
            (4, 4, 0),
            (5, 5, 24),
            (6, 6, 35),
            (9, 12, 30),
            (16, 30, 99),
        ];

        for (rows, cols, mines) in configs {
            let config = GameConfig::new(rows, cols, mines).unwrap();
            for seed in 0..16 {
                let board = Board::with_generator(config, RandomMineGenerator::new(seed)).unwrap();

                assert_eq!(board.config(), config);
                assert_eq!(
                    board.iter_cells().filter(Cell::is_mine).count(),
                    mines as usize
                );
                for cell in board.iter_cells().filter(|cell| !cell.is_mine()) {
                    assert_eq!(
                        cell.adjacent_mine_count(),
                        brute_force_count(&board, cell.coords()),
                        "{rows}x{cols}/{mines} seed {seed} at {:?}",
                        cell.coords()
                    );
                }
            }
        }
    }

    #[test]
    fn new_game_starts_in_progress_with_nothing_revealed() {
        let board = Board::new_game(10, 10, 10).unwrap();

        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.revealed_count(), 0);
        assert_eq!(board.mines_left(), 10);
        assert!(board.iter_cells().all(|cell| !cell.is_revealed()));
    }

    #[test]
    fn empty_board_reveals_everything_and_wins() {
        let mut board = board((4, 4), &[]);

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Win);
        assert_eq!(result.changed.len(), 16);
        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.iter_cells().all(|cell| cell.is_revealed()));
    }

    #[test]
    fn count_next_to_mine_stops_flood() {
        let mut board = board((3, 3), &[(1, 1)]);

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Continue);
        assert_eq!(revealed_coords(&result), [(0, 0)]);
        assert_eq!(board.cell_at((0, 0)).unwrap().adjacent_mine_count(), 1);
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flood_stops_at_numbered_border() {
        // column 3 holds the only mine, so columns 0..=1 are zeros and column 2 is the border
        let mut board = board((3, 4), &[(1, 3)]);

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Continue);
        assert_eq!(result.changed.len(), 9);
        assert!(result.changed.iter().all(|cell| cell.col() <= 2));
        assert_eq!(board.tile_at((1, 2)).unwrap(), Tile::Open(1));
        assert_eq!(board.tile_at((0, 3)).unwrap(), Tile::Hidden);
    }

    #[test]
    fn single_safe_cell_wins_immediately() {
        let mines: Vec<_> = (0..5)
            .flat_map(|row| (0..5).map(move |col| (row, col)))
            .filter(|&coords| coords != (3, 2))
            .collect();
        let mut board = board((5, 5), &mines);

        let result = board.reveal((3, 2)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Win);
        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.check_win());
        assert_eq!(result.changed.len(), 25);
    }

    #[test]
    fn single_safe_cell_wins_with_random_layout() {
        let config = GameConfig::new(5, 5, 24).unwrap();
        let mut board = Board::with_generator(config, RandomMineGenerator::new(3)).unwrap();
        let safe = board
            .iter_cells()
            .find(|cell| !cell.is_mine())
            .map(|cell| cell.coords())
            .unwrap();

        assert_eq!(board.reveal(safe).unwrap().outcome, RevealOutcome::Win);
    }

    #[test]
    fn revealing_mine_loses_and_discloses_all_mines() {
        let mut board = board((4, 4), &[(0, 0), (2, 3), (3, 1)]);
        board.toggle_flag((2, 3)).unwrap();

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Loss);
        assert_eq!(board.status(), GameStatus::Lost);
        assert_eq!(board.triggered_mine(), Some((0, 0)));
        assert_eq!(revealed_coords(&result), [(0, 0), (2, 3), (3, 1)]);
        for cell in board.iter_cells().filter(Cell::is_mine) {
            assert!(cell.is_revealed());
            assert!(!cell.is_flagged());
        }
        assert_eq!(board.tile_at((0, 0)).unwrap(), Tile::Exploded);
        assert_eq!(board.tile_at((2, 3)).unwrap(), Tile::Mine);
        assert_eq!(board.tile_at((1, 1)).unwrap(), Tile::Hidden);
        assert!(!board.check_win());
    }

    #[test]
    fn revealing_flagged_cell_is_noop() {
        let mut board = board((3, 3), &[(2, 2)]);
        board.toggle_flag((0, 0)).unwrap();
        let before = board.clone();

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result, RevealResult::unchanged(RevealOutcome::Continue));
        assert_eq!(board, before);
    }

    #[test]
    fn revealing_revealed_cell_is_noop() {
        let mut board = board((3, 3), &[(2, 2)]);
        // a numbered cell, so the first reveal opens only itself
        assert_eq!(board.reveal((1, 1)).unwrap().outcome, RevealOutcome::Continue);
        let before = board.clone();

        let result = board.reveal((1, 1)).unwrap();

        assert!(!result.has_update());
        assert_eq!(result.outcome, RevealOutcome::Continue);
        assert_eq!(board, before);
    }

    #[test]
    fn flood_skips_flagged_cells_and_keeps_their_flags() {
        let mut board = board((4, 4), &[(3, 3)]);
        board.toggle_flag((0, 3)).unwrap();

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Continue);
        assert!(!revealed_coords(&result).contains(&(0, 3)));
        let flagged = board.cell_at((0, 3)).unwrap();
        assert!(flagged.is_flagged());
        assert!(!flagged.is_revealed());
        assert_eq!(board.flagged_count(), 1);

        let result = board.toggle_flag((0, 3)).unwrap();
        assert!(result.has_update());
        assert_eq!(board.reveal((0, 3)).unwrap().outcome, RevealOutcome::Win);
    }

    #[test]
    fn flood_reports_each_cell_once() {
        let mut board = board((30, 30), &[(15, 15)]);

        let result = board.reveal((0, 0)).unwrap();
        let unique: BTreeSet<_> = revealed_coords(&result).into_iter().collect();

        assert_eq!(unique.len(), result.changed.len());
        assert_eq!(result.outcome, RevealOutcome::Win);
        // every safe cell plus the disclosed mine
        assert_eq!(result.changed.len(), 900);
    }

    #[test]
    fn flood_terminates_on_large_empty_board() {
        let mut board = board((200, 200), &[(199, 199)]);

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Win);
        assert_eq!(board.revealed_count(), 200 * 200 - 1);
    }

    #[test]
    fn flood_through_winding_corridor() {
        // walls of mines with a 3-wide gap at alternating ends leave a snake-shaped zero region
        let mut mines = Vec::new();
        for (index, row) in (3..40).step_by(6).enumerate() {
            let gap = if index % 2 == 0 { 37..=39 } else { 0..=2 };
            mines.extend((0..40).filter(|col| !gap.contains(col)).map(|col| (row, col)));
        }
        let mut board = board((40, 40), &mines);

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Win);
        assert!(board.check_win());
    }

    #[test]
    fn last_safe_cell_wins() {
        let mut board = board((2, 2), &[(0, 0)]);

        assert_eq!(board.reveal((0, 1)).unwrap().outcome, RevealOutcome::Continue);
        assert_eq!(board.reveal((1, 0)).unwrap().outcome, RevealOutcome::Continue);
        assert!(!board.check_win());

        let result = board.reveal((1, 1)).unwrap();

        assert_eq!(result.outcome, RevealOutcome::Win);
        assert_eq!(revealed_coords(&result), [(1, 1), (0, 0)]);
        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.check_win());
        assert_eq!(board.tile_at((0, 0)).unwrap(), Tile::Mine);
    }

    #[test]
    fn win_clears_flags_on_disclosed_mines() {
        let mut board = board((1, 2), &[(0, 0)]);
        board.toggle_flag((0, 0)).unwrap();
        assert_eq!(board.mines_left(), 0);

        board.reveal((0, 1)).unwrap();

        let mine = board.cell_at((0, 0)).unwrap();
        assert!(mine.is_revealed());
        assert!(!mine.is_flagged());
        assert_eq!(board.flagged_count(), 0);
    }

    #[test]
    fn terminal_board_ignores_moves() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);
        board.reveal((0, 0)).unwrap();
        let before = board.clone();

        assert_eq!(
            board.reveal((1, 1)).unwrap(),
            RevealResult::unchanged(RevealOutcome::Loss)
        );
        assert_eq!(
            board.toggle_flag((1, 1)).unwrap(),
            FlagResult { changed: None }
        );
        // terminal check comes before the bounds check
        assert_eq!(
            board.reveal((9, 9)).unwrap(),
            RevealResult::unchanged(RevealOutcome::Loss)
        );
        assert!(!board.toggle_flag((9, 9)).unwrap().has_update());
        assert_eq!(board, before);
    }

    #[test]
    fn won_board_reports_win_on_further_reveals() {
        let mut board = board((2, 2), &[]);
        board.reveal((0, 0)).unwrap();

        assert_eq!(board.reveal((1, 1)).unwrap().outcome, RevealOutcome::Win);
    }

    #[test]
    fn out_of_bounds_is_an_error_and_leaves_board_untouched() {
        let mut board = board((3, 4), &[(0, 0)]);
        let before = board.clone();

        assert_eq!(
            board.reveal((3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.toggle_flag((0, 4)),
            Err(GameError::OutOfBounds { row: 0, col: 4 })
        );
        assert_eq!(
            board.cell_at((5, 5)),
            Err(GameError::OutOfBounds { row: 5, col: 5 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn toggle_flag_twice_restores_state() {
        let mut board = board((3, 3), &[(1, 1)]);
        let before = board.clone();

        let first = board.toggle_flag((2, 0)).unwrap();
        assert!(first.changed.unwrap().is_flagged());
        assert_eq!(board.flagged_count(), 1);

        let second = board.toggle_flag((2, 0)).unwrap();
        assert!(!second.changed.unwrap().is_flagged());
        assert_eq!(board, before);
    }

    #[test]
    fn toggle_flag_on_revealed_cell_is_noop() {
        let mut board = board((3, 3), &[(1, 1)]);
        board.reveal((0, 0)).unwrap();

        let result = board.toggle_flag((0, 0)).unwrap();

        assert!(!result.has_update());
        assert!(!board.cell_at((0, 0)).unwrap().is_flagged());
    }

    #[test]
    fn flags_are_not_capped_by_mine_count() {
        let mut board = board((3, 3), &[(1, 1)]);

        for coords in [(0, 0), (0, 1), (0, 2)] {
            assert!(board.toggle_flag(coords).unwrap().has_update());
        }

        assert_eq!(board.flagged_count(), 3);
        assert_eq!(board.mines_left(), -2);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn check_win_agrees_with_status_over_random_play() {
        for seed in 0..16 {
            let config = GameConfig::new(8, 8, 10).unwrap();
            let mut board = Board::with_generator(config, RandomMineGenerator::new(seed)).unwrap();
            let safe: Vec<_> = board
                .iter_cells()
                .filter(|cell| !cell.is_mine())
                .map(|cell| cell.coords())
                .collect();

            for coords in safe {
                let result = board.reveal(coords).unwrap();
                assert_eq!(board.check_win(), board.status() == GameStatus::Won);
                assert_eq!(
                    result.outcome == RevealOutcome::Win,
                    board.check_win() && result.has_update()
                );
                if board.is_finished() {
                    break;
                }
            }

            assert_eq!(board.status(), GameStatus::Won);
            assert!(board.iter_cells().all(|cell| cell.is_revealed()));
        }
    }
}
