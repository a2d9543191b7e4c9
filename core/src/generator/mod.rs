use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of mine placements for a new board.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
