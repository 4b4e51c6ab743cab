use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::traits::{Game, Player, Role};
use crate::error::SearchError;

/// Picks a uniformly random legal action. Useful as a sparring partner.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    role: Role,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(role: Role, seed: u64) -> Self {
        Self {
            role,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Player<G> for RandomPlayer {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn role(&self) -> Role {
        self.role
    }

    fn get_move(&mut self, game: &G, state: &G::State) -> Result<G::Action, SearchError> {
        game.actions(state)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SearchError::NoAvailableMoves)
    }

    fn states_explored(&self) -> usize {
        0
    }
}
