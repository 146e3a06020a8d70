use crate::core::{Board, Color, Position};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 合法手から一様ランダムに選ぶ (self-play の比較相手)
pub struct RandomAI {
    pub name: String,
    rng: StdRng,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _board: &Board, _color: Color, legal_moves: &[Position]) -> Option<Position> {
        legal_moves.choose(&mut self.rng).copied()
    }
}
