use super::*;
use ndarray::Array2;

/// Uniform placement by rejection sampling: draw a random cell, retry when it
/// already holds a mine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMineLayoutGenerator {
    seed: u64,
}

impl RandomMineLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomMineLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let total_cells = config.total_cells();

        // guard for unchecked configs, rejection sampling would spin forever
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return MineLayout::from_mine_mask(Array2::from_elem(config.size, true));
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut placed = 0;
        while placed < config.mines {
            let coords = (rng.gen_range(0..rows), rng.gen_range(0..cols));
            if mine_mask[coords] {
                continue;
            }
            mine_mask[coords] = true;
            placed += 1;
        }

        MineLayout::from_mine_mask(mine_mask)
    }
}
