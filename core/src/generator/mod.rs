use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Places exactly `config.mines` mines. `config` must already be validated.
    fn generate(self, config: GameConfig) -> MineLayout;
}
