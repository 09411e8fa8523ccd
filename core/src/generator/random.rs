use super::*;

/// Generation strategy that lights each cell independently, seeded so a board can be replayed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<BoardEngine> {
        use rand::prelude::*;

        log::debug!("generating board for {:?} with seed {:#x}", config, self.seed);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        BoardEngine::initialize(config, &mut rng)
    }
}
