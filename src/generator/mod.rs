use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines on a fresh board.
pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
