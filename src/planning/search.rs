//! The tree-search driver shared by BFS, DFS, UCS and A*.
//!
//! Every algorithm runs the same loop:
//!
//! 1. Seed the frontier with the root node.
//! 2. Pop a node. If its state is a goal, stop: the problem is solved.
//! 3. Otherwise mark its state explored and generate one child per legal action.
//! 4. Drop children whose state is already explored. A child whose state is
//!    already waiting in the frontier is dropped too, unless the frontier
//!    strategy says the child improves on the waiting node, in which case the
//!    child replaces it.
//! 5. Repeat until a goal is popped or the frontier runs dry.
//!
//! The frontier type alone decides pop order and whether replacement happens,
//! so `Bfs`, `Dfs`, `Ucs` and `AStar` are type aliases over `TreeSearch`.

use std::time::{Duration, Instant};

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::frontier::{CostFrontier, EstimateFrontier, FifoFrontier, Frontier, LifoFrontier};
use super::node::{NodeArena, NodeId, SearchNode};
use super::SearchProblem;
use crate::error::SearchError;

/// Resource budgets for a single `solve` call. The default is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of nodes kept in the search tree.
    pub max_nodes: Option<usize>,
    /// Maximum number of states waiting in the frontier at once.
    pub max_frontier: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_max_frontier(mut self, max_frontier: usize) -> Self {
        self.max_frontier = Some(max_frontier);
        self
    }
}

/// Counters for one `solve` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Child nodes built, whether or not they entered the frontier.
    pub generated: usize,
    /// Frontier entries superseded by a cheaper node for the same state.
    pub replaced: usize,
    /// Deepest node that entered the frontier.
    pub max_depth: usize,
    /// Largest number of states waiting in the frontier at once.
    pub peak_frontier: usize,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of pushing one child toward the frontier, for trace logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Admission {
    Added,
    Updated,
    Ignored,
}

pub struct TreeSearch<P: SearchProblem, F: Frontier> {
    problem: P,
    initial_state: P::State,
    limits: SearchLimits,
    frontier: F,
    nodes: NodeArena<P::State, P::Action>,
    explored: FxHashSet<P::State>,
    /// The single active frontier node for each state waiting to be expanded.
    visited: FxHashMap<P::State, NodeId>,
    end_node: Option<NodeId>,
    stats: SearchStats,
    last_duration: Option<Duration>,
}

pub type Bfs<P> = TreeSearch<P, FifoFrontier>;
pub type Dfs<P> = TreeSearch<P, LifoFrontier>;
pub type Ucs<P> = TreeSearch<P, CostFrontier>;
pub type AStar<P> = TreeSearch<P, EstimateFrontier>;

impl<P: SearchProblem, F: Frontier> TreeSearch<P, F> {
    pub fn new(problem: P, initial_state: P::State) -> Self {
        Self::with_limits(problem, initial_state, SearchLimits::default())
    }

    pub fn with_limits(problem: P, initial_state: P::State, limits: SearchLimits) -> Self {
        Self {
            problem,
            initial_state,
            limits,
            frontier: F::default(),
            nodes: NodeArena::new(),
            explored: FxHashSet::default(),
            visited: FxHashMap::default(),
            end_node: None,
            stats: SearchStats::default(),
            last_duration: None,
        }
    }

    pub fn algorithm_name(&self) -> &'static str {
        F::NAME
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of states expanded during the last `solve` call.
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    /// The goal node found by the last `solve` call.
    pub fn end_node(&self) -> Option<&SearchNode<P::State, P::Action>> {
        self.end_node.map(|id| self.nodes.get(id))
    }

    /// Actions leading from the initial state to the goal, if one was found.
    pub fn solution(&self) -> Option<Vec<P::Action>> {
        self.end_node.map(|id| self.nodes.path_to(id))
    }

    /// Clears every per-search structure and counter.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.nodes.clear();
        self.explored.clear();
        self.visited.clear();
        self.end_node = None;
        self.stats.reset();
        self.last_duration = None;
    }

    /// Searches for a goal state.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` - A goal was reached; see `solution` and `end_node`
    /// - `Ok(false)` - The frontier was exhausted without reaching a goal
    /// - `Err(_)` - A node, frontier or memory budget ran out
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn solve(&mut self) -> Result<bool, SearchError> {
        self.reset();
        let start = Instant::now();
        let result = self.run();
        self.last_duration = Some(start.elapsed());

        match &result {
            Ok(true) => debug!(
                "{}: solved, cost {:.3}, depth {}, {} expanded, {} generated",
                F::NAME,
                self.end_node().map_or(0.0, |node| node.cost()),
                self.end_node().map_or(0, |node| node.depth()),
                self.stats.expanded,
                self.stats.generated
            ),
            Ok(false) => debug!(
                "{}: frontier exhausted after {} expansions",
                F::NAME,
                self.stats.expanded
            ),
            Err(error) => debug!("{}: aborted: {}", F::NAME, error),
        }

        result
    }

    fn run(&mut self) -> Result<bool, SearchError> {
        let root = if F::INFORMED {
            SearchNode::informed_root(&self.problem, self.initial_state.clone())
        } else {
            SearchNode::root(self.initial_state.clone())
        };
        let root_id = self.nodes.insert(root)?;
        self.frontier.push(root_id, self.nodes.get(root_id))?;
        self.reserve_visited()?;
        self.visited.insert(self.initial_state.clone(), root_id);
        self.stats.peak_frontier = 1;

        while let Some(node_id) = self.frontier.pop() {
            let state = self.nodes.get(node_id).state().clone();

            // Skip entries superseded by a cheaper node for the same state.
            if self.visited.get(&state) != Some(&node_id) {
                continue;
            }
            self.visited.remove(&state);

            if self.problem.is_goal_state(&state) {
                self.end_node = Some(node_id);
                return Ok(true);
            }

            self.expand(node_id, state)?;
        }

        Ok(false)
    }

    fn expand(&mut self, node_id: NodeId, state: P::State) -> Result<(), SearchError> {
        let actions = self.problem.actions(&state);
        trace!(
            "{}: expanding {:?} (g={}, h={}, {} actions)",
            F::NAME,
            state,
            self.nodes.get(node_id).cost(),
            self.nodes.get(node_id).heuristic(),
            actions.len()
        );
        self.explored
            .try_reserve(1)
            .map_err(SearchError::out_of_memory(self.nodes.len()))?;
        self.explored.insert(state);
        self.stats.expanded += 1;

        for action in actions {
            let child = SearchNode::child(
                &self.problem,
                node_id,
                self.nodes.get(node_id),
                action,
                F::INFORMED,
            );
            self.stats.generated += 1;

            let admission = self.admit(child)?;
            trace!("{}:   child {:?}", F::NAME, admission);
        }

        Ok(())
    }

    fn admit(&mut self, child: SearchNode<P::State, P::Action>) -> Result<Admission, SearchError> {
        if self.explored.contains(child.state()) {
            return Ok(Admission::Ignored);
        }

        let admission = match self.visited.get(child.state()) {
            None => Admission::Added,
            Some(&incumbent) if F::replaces(&child, self.nodes.get(incumbent)) => {
                Admission::Updated
            }
            Some(_) => Admission::Ignored,
        };
        if admission == Admission::Ignored {
            return Ok(admission);
        }

        if let Some(limit) = self.limits.max_nodes {
            if self.nodes.len() >= limit {
                return Err(SearchError::NodeLimitExceeded { limit });
            }
        }

        let depth = child.depth();
        let state = child.state().clone();
        let child_id = self.nodes.insert(child)?;
        self.frontier.push(child_id, self.nodes.get(child_id))?;
        self.reserve_visited()?;
        self.visited.insert(state, child_id);

        if admission == Admission::Updated {
            self.stats.replaced += 1;
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.visited.len());

        if let Some(limit) = self.limits.max_frontier {
            if self.visited.len() > limit {
                return Err(SearchError::FrontierLimitExceeded { limit });
            }
        }

        Ok(admission)
    }

    fn reserve_visited(&mut self) -> Result<(), SearchError> {
        self.visited
            .try_reserve(1)
            .map_err(SearchError::out_of_memory(self.nodes.len()))
    }
}
