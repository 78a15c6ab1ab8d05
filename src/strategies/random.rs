//! A strategy that randomly chooses a move, for use in tests.

use super::super::interface::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: StdRng::from_entropy() }
    }

    /// A reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Random {
        Random { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl<G: Game> Strategy<G> for Random {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let state = game.current_state();
        let moves = state.legal_moves();
        if is_terminal(game, state, &moves) {
            return None;
        }
        moves.choose(&mut self.rng).copied()
    }
}
