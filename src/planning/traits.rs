//! Core traits for single-agent planning search.

use std::fmt::Debug;
use std::hash::Hash;

/// A planning problem: a state-action graph with action costs and an optional
/// heuristic.
///
/// States identify search nodes for duplicate detection, so `Eq` and `Hash`
/// must be total and stable for the lifetime of a search.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// Returns the legal actions from `state`. The order determines tie-breaks.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the state reached by applying `action` to `state`. Must be pure.
    fn do_action(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Cost of applying `action` in `state`. Uniform-cost and A* search assume
    /// this is never negative.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64;

    /// Estimated remaining cost from `state` to a goal. A* is only optimal when
    /// this never overestimates. Default implementation returns 0.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

impl<P: SearchProblem + ?Sized> SearchProblem for &P {
    type State = P::State;
    type Action = P::Action;

    #[inline]
    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        (**self).actions(state)
    }

    #[inline]
    fn do_action(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        (**self).do_action(state, action)
    }

    #[inline]
    fn is_goal_state(&self, state: &Self::State) -> bool {
        (**self).is_goal_state(state)
    }

    #[inline]
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64 {
        (**self).cost(state, action)
    }

    #[inline]
    fn heuristic(&self, state: &Self::State) -> f64 {
        (**self).heuristic(state)
    }
}
