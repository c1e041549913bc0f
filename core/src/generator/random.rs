use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Uniformly random placement: a partial Fisher-Yates shuffle over the flat cell indices, so
/// the work is bounded by the board size even when nearly every cell is a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;
        debug_assert!(config.validate().is_ok(), "unvalidated config {config:?}");

        let (rows, cols) = config.size();
        let total_cells = config.total_cells() as usize;
        let mines = config.mines as usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut indices: Vec<usize> = (0..total_cells).collect();
        let (chosen, _) = indices.partial_shuffle(&mut rng, mines);

        let mut mine_mask: Array2<bool> = Array2::default((rows, cols).to_nd_index());
        for &index in chosen.iter() {
            mine_mask[from_flat_index(index, cols).to_nd_index()] = true;
        }

        log::debug!(
            "Placed {} mines on a {}x{} board with seed {:#x}",
            mines,
            rows,
            cols,
            self.seed
        );

        MineLayout {
            mine_mask,
            mine_count: config.mines,
        }
    }
}
