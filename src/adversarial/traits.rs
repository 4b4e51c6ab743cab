//! Core traits for two-player zero-sum game-tree search.

use std::fmt::{self, Debug};

use crate::error::SearchError;

/// The two sides of a zero-sum game. Positive game values favour `Max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    #[inline]
    pub fn opponent(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// The worst possible value from this side's point of view.
    #[inline]
    pub fn worst_value(self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        }
    }

    /// Returns true if `candidate` is strictly better than `incumbent` for this side.
    #[inline]
    pub fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Role::Max => candidate > incumbent,
            Role::Min => candidate < incumbent,
        }
    }

    /// The side a signed game value favours, or `None` for zero.
    pub fn favoured_by(value: f64) -> Option<Role> {
        if value > 0.0 {
            Some(Role::Max)
        } else if value < 0.0 {
            Some(Role::Min)
        } else {
            None
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Max => write!(f, "MAX"),
            Role::Min => write!(f, "MIN"),
        }
    }
}

/// A position in a two-player zero-sum game.
pub trait GameState: Clone {
    /// Returns true if the game is over.
    fn is_final_state(&self) -> bool;

    /// The exact game value of a final state: positive favours `Max`, negative
    /// favours `Min`, zero is a draw. Meaningless for non-final states; search
    /// uses an `Evaluator` there instead.
    fn game_value(&self) -> f64;

    fn player_to_move(&self) -> Role;
}

/// Rules of a game: the initial position, legal actions and transitions.
pub trait Game {
    type State: GameState;
    type Action: Clone + PartialEq + Debug;

    fn init(&self) -> Self::State;

    /// Legal actions from `state`. The order determines tie-breaks.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns a fresh state with `action` applied. `state` is left untouched.
    fn do_action(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Scores a non-final position reached at the depth limit. Higher scores favour
/// `Max`. Must be deterministic.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S) -> f64;
}

/// Falls back to the state's own game value, which is exact for final states
/// and whatever the game reports otherwise (typically 0).
#[derive(Clone, Copy, Default, Debug)]
pub struct GameValueEvaluator;

impl<S: GameState> Evaluator<S> for GameValueEvaluator {
    #[inline]
    fn evaluate(&self, state: &S) -> f64 {
        state.game_value()
    }
}

impl<S: GameState, E: Evaluator<S> + ?Sized> Evaluator<S> for &E {
    #[inline]
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }
}

/// An agent that picks moves for one side.
pub trait Player<G: Game> {
    fn name(&self) -> String;

    fn role(&self) -> Role;

    /// Chooses an action from `state`. Resets the exploration counter first.
    fn get_move(&mut self, game: &G, state: &G::State) -> Result<G::Action, SearchError>;

    /// States explored by the last `get_move` call.
    fn states_explored(&self) -> usize;
}
