use super::*;

/// Purely random placement: every draw picks uniformly among the cells not yet mined.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;

        let mut layout = MineLayout::empty(config.side);
        let mut free_cells: Vec<CellCount> = (0..config.total_cells()).collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..config.mines {
            let pick = rng.random_range(0..free_cells.len());
            // order of the pool is irrelevant, only its membership
            let index = free_cells.swap_remove(pick);
            let coords = from_linear(index, config.side);
            log::trace!("Mine placed at {:?} (linear {})", coords, index);
            layout.place_mine(coords);
        }

        // double check mine count
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
            return Err(GameError::LayoutMismatch);
        }
        Ok(layout)
    }
}
