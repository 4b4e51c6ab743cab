//! Depth-limited minimax players, with and without alpha-beta pruning.
//!
//! Both players share one implementation and differ only in the `SearchMode`
//! marker. `MinMaxPlayer` explores every node up to the depth limit and is the
//! reference the pruning player is checked against.
//!
//! Alpha is the value MAX can already guarantee and beta the value MIN can
//! already guarantee. Once alpha >= beta at some node, none of its remaining
//! children can change the decision at the root, so `AlphaBetaPlayer` never
//! enters them. It returns the same action and value as `MinMaxPlayer` with the
//! same depth limit and evaluator while exploring at most as many states.

use std::marker::PhantomData;

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::search::{DepthLimit, ExplorationCounter, Pruning, TreeWalker};
use super::traits::{Evaluator, Game, GameValueEvaluator, Player, Role};
use crate::error::SearchError;

/// Selects how a `SearchPlayer` walks the tree.
pub trait SearchMode {
    const NAME: &'static str;
    const PRUNING: Pruning;
}

/// Plain minimax.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exhaustive;

impl SearchMode for Exhaustive {
    const NAME: &'static str = "MinMax";
    const PRUNING: Pruning = Pruning::None;
}

/// Minimax with alpha-beta cutoffs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pruned;

impl SearchMode for Pruned {
    const NAME: &'static str = "AlphaBeta";
    const PRUNING: Pruning = Pruning::AlphaBeta;
}

#[derive(Clone, Debug)]
pub struct SearchPlayer<M, E = GameValueEvaluator> {
    role: Role,
    depth_limit: DepthLimit,
    evaluator: E,
    counter: ExplorationCounter,
    last_value: Option<f64>,
    _mode: PhantomData<M>,
}

pub type MinMaxPlayer<E = GameValueEvaluator> = SearchPlayer<Exhaustive, E>;

pub type AlphaBetaPlayer<E = GameValueEvaluator> = SearchPlayer<Pruned, E>;

impl<M: SearchMode> SearchPlayer<M> {
    /// Creates a player for `role` looking `depth` plies ahead (`<= 0` for no
    /// limit), scoring cut-off positions by their game value.
    pub fn new(role: Role, depth: i32) -> Self {
        Self {
            role,
            depth_limit: DepthLimit::from_plies(depth),
            evaluator: GameValueEvaluator,
            counter: ExplorationCounter::default(),
            last_value: None,
            _mode: PhantomData,
        }
    }
}

impl<M: SearchMode, E> SearchPlayer<M, E> {
    pub fn with_evaluator<F>(self, evaluator: F) -> SearchPlayer<M, F> {
        SearchPlayer {
            role: self.role,
            depth_limit: self.depth_limit,
            evaluator,
            counter: self.counter,
            last_value: None,
            _mode: PhantomData,
        }
    }

    /// Caps the number of states a single `get_move` may explore.
    pub fn with_exploration_limit(mut self, limit: usize) -> Self {
        self.counter.set_limit(Some(limit));
        self
    }

    pub fn depth_limit(&self) -> DepthLimit {
        self.depth_limit
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Backed-up value of the move chosen by the last `get_move` call.
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }
}

impl<G, M, E> Player<G> for SearchPlayer<M, E>
where
    G: Game,
    M: SearchMode,
    E: Evaluator<G::State>,
{
    fn name(&self) -> String {
        match self.depth_limit {
            DepthLimit::Unlimited => M::NAME.to_string(),
            DepthLimit::Plies(depth) => format!("{}(d={})", M::NAME, depth),
        }
    }

    fn role(&self) -> Role {
        self.role
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn get_move(&mut self, game: &G, state: &G::State) -> Result<G::Action, SearchError> {
        self.counter.reset();
        self.last_value = None;

        let decision = TreeWalker::new(
            game,
            &self.evaluator,
            self.depth_limit,
            M::PRUNING,
            &mut self.counter,
        )
        .decide(state, self.role)?;

        debug!(
            "{} ({}, depth {}): chose {:?} with value {} after {} states",
            M::NAME,
            self.role,
            self.depth_limit,
            decision.action,
            decision.value,
            self.counter.count()
        );
        self.last_value = Some(decision.value);
        Ok(decision.action)
    }

    fn states_explored(&self) -> usize {
        self.counter.count()
    }
}
