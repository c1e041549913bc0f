use sweeper_core::{Board, GameConfig, RandomMineGenerator, RevealOutcome};

use crate::command::Command;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A run of games sharing one configuration.
///
/// With a fixed seed, the n-th game uses `seed + n` so a whole session can be replayed.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    seed: Option<u64>,
    games_started: u64,
    board: Board,
}

impl Session {
    pub fn new(config: GameConfig, seed: Option<u64>) -> sweeper_core::Result<Self> {
        let board = Self::start_game(config, seed, 0)?;
        Ok(Self {
            config,
            seed,
            games_started: 1,
            board,
        })
    }

    fn start_game(
        config: GameConfig,
        seed: Option<u64>,
        game_index: u64,
    ) -> sweeper_core::Result<Board> {
        let generator = match seed {
            Some(seed) => RandomMineGenerator::new(seed.wrapping_add(game_index)),
            None => RandomMineGenerator::from_entropy(),
        };
        log::info!(
            "Starting game {} ({}x{}, {} mines, seed {:#x})",
            game_index + 1,
            config.rows,
            config.cols,
            config.mines,
            generator.seed()
        );
        Board::with_generator(config, generator)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn apply(&mut self, command: Command) -> sweeper_core::Result<Flow> {
        match command {
            Command::Reveal(coords) => {
                let result = self.board.reveal(coords)?;
                log::debug!(
                    "Reveal {:?}: {:?}, {} cells changed",
                    coords,
                    result.outcome,
                    result.changed.len()
                );
                match result.outcome {
                    RevealOutcome::Win if result.has_update() => log::info!("Game won"),
                    RevealOutcome::Loss if result.has_update() => log::info!("Game lost"),
                    _ => {}
                }
            }
            Command::Flag(coords) => {
                self.board.toggle_flag(coords)?;
            }
            Command::NewGame => {
                self.board = Self::start_game(self.config, self.seed, self.games_started)?;
                self.games_started += 1;
            }
            Command::Redraw => {}
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
