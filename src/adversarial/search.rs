//! Depth-limited game-tree evaluation shared by the MinMax and AlphaBeta players.
//!
//! # Traversal
//!
//! The tree is walked depth first with an explicit stack of frames instead of
//! call-stack recursion, so unlimited-depth searches on long games cannot
//! overflow the stack. Each frame holds a position, its legal actions, the index
//! of the next action to try and the running best value. The order in which
//! children are entered is exactly the order a recursive implementation would
//! use.
//!
//! # Leaves
//!
//! A node is a leaf when its state is final (scored with `GameState::game_value`),
//! when it sits at the depth limit, or when it has no legal actions. The last two
//! are scored with the `Evaluator`, which is called on every such visit, so no
//! cached value can go stale.
//!
//! # Pruning
//!
//! With `Pruning::AlphaBeta` each frame carries the window [alpha, beta]. A MAX
//! frame raises alpha with its best child value and a MIN frame lowers beta; once
//! alpha >= beta the remaining siblings cannot change the result and are skipped.
//! Values are fail-soft: a pruned frame still reports its running best.

use std::fmt;

use log::trace;

use super::traits::{Evaluator, Game, GameState, Role};
use crate::error::SearchError;

/// Counts states entered by one `get_move` call and enforces an optional budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplorationCounter {
    count: usize,
    limit: Option<usize>,
}

impl ExplorationCounter {
    pub fn new(limit: Option<usize>) -> Self {
        Self { count: 0, limit }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Records one more explored state.
    pub fn increment(&mut self) -> Result<(), SearchError> {
        self.count += 1;
        match self.limit {
            Some(limit) if self.count > limit => {
                Err(SearchError::ExplorationLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pruning {
    None,
    AlphaBeta,
}

/// How far below the root the search may look. `Plies(d)` scores nodes at
/// depth `d` with the evaluator; the root's children sit at depth 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthLimit {
    Unlimited,
    Plies(u32),
}

impl DepthLimit {
    /// Maps the conventional integer setting: anything `<= 0` is unlimited.
    pub fn from_plies(depth: i32) -> Self {
        if depth > 0 {
            DepthLimit::Plies(depth as u32)
        } else {
            DepthLimit::Unlimited
        }
    }

    #[inline]
    pub fn reached(self, depth: u32) -> bool {
        match self {
            DepthLimit::Unlimited => false,
            DepthLimit::Plies(limit) => depth >= limit,
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DepthLimit::Unlimited => write!(f, "unlimited"),
            DepthLimit::Plies(plies) => write!(f, "{}", plies),
        }
    }
}

/// The action chosen at the root and its backed-up value.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<A> {
    pub action: A,
    pub value: f64,
}

struct Frame<S, A> {
    state: S,
    actions: Vec<A>,
    next: usize,
    depth: u32,
    to_move: Role,
    best: f64,
    alpha: f64,
    beta: f64,
}

impl<S, A> Frame<S, A> {
    fn is_cut(&self) -> bool {
        self.alpha >= self.beta
    }

    /// Builds the next child, or `None` once every action was tried or the
    /// window closed.
    fn next_child<G>(&mut self, game: &G) -> Option<S>
    where
        G: Game<State = S, Action = A>,
    {
        if self.is_cut() {
            return None;
        }
        let action = self.actions.get(self.next)?;
        self.next += 1;
        Some(game.do_action(&self.state, action))
    }

    fn absorb(&mut self, value: f64, pruning: Pruning) {
        if self.to_move.prefers(value, self.best) {
            self.best = value;
        }
        if pruning == Pruning::AlphaBeta {
            match self.to_move {
                Role::Max if self.best > self.alpha => self.alpha = self.best,
                Role::Min if self.best < self.beta => self.beta = self.best,
                _ => {}
            }
        }
    }
}

enum Visit<S, A> {
    Leaf(f64),
    Inner(Frame<S, A>),
}

/// Walks one game tree for one `get_move` call.
pub struct TreeWalker<'a, G: Game, E> {
    game: &'a G,
    evaluator: &'a E,
    depth_limit: DepthLimit,
    pruning: Pruning,
    counter: &'a mut ExplorationCounter,
}

impl<'a, G, E> TreeWalker<'a, G, E>
where
    G: Game,
    E: Evaluator<G::State>,
{
    pub fn new(
        game: &'a G,
        evaluator: &'a E,
        depth_limit: DepthLimit,
        pruning: Pruning,
        counter: &'a mut ExplorationCounter,
    ) -> Self {
        Self {
            game,
            evaluator,
            depth_limit,
            pruning,
            counter,
        }
    }

    /// Picks the best action for `role` from `state`. Ties go to the action
    /// listed first.
    pub fn decide(
        &mut self,
        state: &G::State,
        role: Role,
    ) -> Result<Decision<G::Action>, SearchError> {
        let actions = self.game.actions(state);
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;
        let mut best: Option<Decision<G::Action>> = None;

        for action in actions {
            let child = self.game.do_action(state, &action);
            let value = self.subtree_value(child, 1, alpha, beta, role.opponent())?;
            trace!("root action {:?} scored {}", action, value);

            let improves = match &best {
                None => true,
                Some(decision) => role.prefers(value, decision.value),
            };
            if improves {
                best = Some(Decision { action, value });
            }

            if self.pruning == Pruning::AlphaBeta {
                if let Some(decision) = &best {
                    match role {
                        Role::Max => alpha = alpha.max(decision.value),
                        Role::Min => beta = beta.min(decision.value),
                    }
                }
            }
        }

        best.ok_or(SearchError::NoAvailableMoves)
    }

    /// Backed-up value of `state`, entered at `depth` with the given window.
    fn subtree_value(
        &mut self,
        state: G::State,
        depth: u32,
        alpha: f64,
        beta: f64,
        to_move: Role,
    ) -> Result<f64, SearchError> {
        let root = match self.visit(state, depth, alpha, beta, to_move)? {
            Visit::Leaf(value) => return Ok(value),
            Visit::Inner(frame) => frame,
        };

        let mut value = root.best;
        let mut stack = vec![root];

        loop {
            let frame = match stack.last_mut() {
                Some(frame) => frame,
                None => return Ok(value),
            };

            match frame.next_child(self.game) {
                Some(child) => {
                    let (depth, alpha, beta, to_move) =
                        (frame.depth + 1, frame.alpha, frame.beta, frame.to_move.opponent());
                    match self.visit(child, depth, alpha, beta, to_move)? {
                        Visit::Leaf(leaf_value) => frame.absorb(leaf_value, self.pruning),
                        Visit::Inner(child_frame) => {
                            stack
                                .try_reserve(1)
                                .map_err(SearchError::out_of_memory(self.counter.count()))?;
                            stack.push(child_frame);
                        }
                    }
                }
                None => {
                    value = frame.best;
                    stack.pop();
                    if let Some(parent) = stack.last_mut() {
                        parent.absorb(value, self.pruning);
                    }
                }
            }
        }
    }

    /// Counts `state` as explored and either scores it or opens a frame for it.
    fn visit(
        &mut self,
        state: G::State,
        depth: u32,
        alpha: f64,
        beta: f64,
        to_move: Role,
    ) -> Result<Visit<G::State, G::Action>, SearchError> {
        self.counter.increment()?;

        if state.is_final_state() {
            return Ok(Visit::Leaf(state.game_value()));
        }
        if self.depth_limit.reached(depth) {
            return Ok(Visit::Leaf(self.evaluator.evaluate(&state)));
        }

        let actions = self.game.actions(&state);
        if actions.is_empty() {
            return Ok(Visit::Leaf(self.evaluator.evaluate(&state)));
        }

        Ok(Visit::Inner(Frame {
            state,
            actions,
            next: 0,
            depth,
            to_move,
            best: to_move.worst_value(),
            alpha,
            beta,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_enforces_limit() {
        let mut counter = ExplorationCounter::new(Some(2));
        assert!(counter.increment().is_ok());
        assert!(counter.increment().is_ok());
        assert_eq!(
            counter.increment(),
            Err(SearchError::ExplorationLimitExceeded { limit: 2 })
        );
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert!(counter.increment().is_ok());
    }

    #[test]
    fn test_depth_limit_from_plies() {
        assert_eq!(DepthLimit::from_plies(0), DepthLimit::Unlimited);
        assert_eq!(DepthLimit::from_plies(-1), DepthLimit::Unlimited);
        assert_eq!(DepthLimit::from_plies(3), DepthLimit::Plies(3));
        assert!(DepthLimit::Plies(3).reached(3));
        assert!(!DepthLimit::Plies(3).reached(2));
        assert!(!DepthLimit::Unlimited.reached(u32::MAX));
    }
}
