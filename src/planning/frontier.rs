//! Frontier strategies: the only thing that differs between BFS, DFS, UCS and A*
//! apart from how duplicates are handled.
//!
//! | Strategy            | Pop rule          | Duplicates                    |
//! |---------------------|-------------------|-------------------------------|
//! | `FifoFrontier`      | oldest first      | skipped                       |
//! | `LifoFrontier`      | newest first      | skipped                       |
//! | `CostFrontier`      | minimum g         | replaced on strictly lower g  |
//! | `EstimateFrontier`  | minimum f = g + h | replaced on strictly lower f  |
//!
//! The priority frontiers never remove a replaced entry in place. The driver
//! keeps the id of the single active node per state and skips stale ids when
//! they are popped, which turns decrease-key into an O(log n) push.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::marker::PhantomData;

use super::node::{NodeId, SearchNode};
use crate::error::SearchError;

/// Ordered working set of generated-but-not-expanded nodes.
pub trait Frontier: Default {
    /// Name of the search algorithm this frontier drives.
    const NAME: &'static str;

    /// Whether child nodes need a heuristic estimate.
    const INFORMED: bool = false;

    /// Adds `id`, failing with `OutOfMemory` instead of aborting when the
    /// frontier cannot grow.
    fn push<S, A>(&mut self, id: NodeId, node: &SearchNode<S, A>) -> Result<(), SearchError>;

    fn pop(&mut self) -> Option<NodeId>;

    /// Number of stored entries, stale ones included.
    fn len(&self) -> usize;

    fn clear(&mut self);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `candidate` should take the place of `incumbent`, a node
    /// for the same state that is still waiting in the frontier. Strategies
    /// that never revise a frontier entry keep the default.
    #[inline]
    fn replaces<S, A>(_candidate: &SearchNode<S, A>, _incumbent: &SearchNode<S, A>) -> bool {
        false
    }
}

/// FIFO queue, used by breadth-first search.
#[derive(Clone, Default, Debug)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    const NAME: &'static str = "BFS";

    #[inline]
    fn push<S, A>(&mut self, id: NodeId, _node: &SearchNode<S, A>) -> Result<(), SearchError> {
        self.queue
            .try_reserve(1)
            .map_err(SearchError::out_of_memory(self.queue.len()))?;
        self.queue.push_back(id);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// LIFO stack, used by depth-first search.
#[derive(Clone, Default, Debug)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    const NAME: &'static str = "DFS";

    #[inline]
    fn push<S, A>(&mut self, id: NodeId, _node: &SearchNode<S, A>) -> Result<(), SearchError> {
        self.stack
            .try_reserve(1)
            .map_err(SearchError::out_of_memory(self.stack.len()))?;
        self.stack.push(id);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Selects the value a `PriorityFrontier` orders by.
pub trait PriorityKey {
    const NAME: &'static str;
    const INFORMED: bool;

    fn key<S, A>(node: &SearchNode<S, A>) -> f64;
}

/// Orders by accumulated path cost g.
#[derive(Clone, Copy, Default, Debug)]
pub struct PathCost;

impl PriorityKey for PathCost {
    const NAME: &'static str = "UCS";
    const INFORMED: bool = false;

    #[inline]
    fn key<S, A>(node: &SearchNode<S, A>) -> f64 {
        node.cost()
    }
}

/// Orders by estimated total cost f = g + h.
#[derive(Clone, Copy, Default, Debug)]
pub struct TotalEstimate;

impl PriorityKey for TotalEstimate {
    const NAME: &'static str = "A*";
    const INFORMED: bool = true;

    #[inline]
    fn key<S, A>(node: &SearchNode<S, A>) -> f64 {
        node.estimate()
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: f64,
    sequence: u64,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap pops the lowest priority; equal priorities pop
    // in insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Binary min-heap keyed by `K`.
#[derive(Clone, Debug)]
pub struct PriorityFrontier<K> {
    heap: BinaryHeap<Entry>,
    next_sequence: u64,
    _key: PhantomData<K>,
}

impl<K> Default for PriorityFrontier<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            _key: PhantomData,
        }
    }
}

impl<K: PriorityKey> Frontier for PriorityFrontier<K> {
    const NAME: &'static str = K::NAME;
    const INFORMED: bool = K::INFORMED;

    fn push<S, A>(&mut self, id: NodeId, node: &SearchNode<S, A>) -> Result<(), SearchError> {
        self.heap
            .try_reserve(1)
            .map_err(SearchError::out_of_memory(self.heap.len()))?;
        self.heap.push(Entry {
            priority: K::key(node),
            sequence: self.next_sequence,
            id,
        });
        self.next_sequence += 1;
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }

    #[inline]
    fn replaces<S, A>(candidate: &SearchNode<S, A>, incumbent: &SearchNode<S, A>) -> bool {
        K::key(candidate) < K::key(incumbent)
    }
}

/// Frontier for uniform-cost search.
pub type CostFrontier = PriorityFrontier<PathCost>;

/// Frontier for A* search.
pub type EstimateFrontier = PriorityFrontier<TotalEstimate>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::node::NodeArena;
    use crate::planning::SearchProblem;

    /// Nodes at a fixed path cost and heuristic, indexed by state.
    struct Fixed {
        costs: Vec<(f64, f64)>,
    }

    impl SearchProblem for Fixed {
        type State = usize;
        type Action = usize;

        fn actions(&self, _state: &usize) -> Vec<usize> {
            (1..self.costs.len()).collect()
        }

        fn do_action(&self, _state: &usize, action: &usize) -> usize {
            *action
        }

        fn is_goal_state(&self, _state: &usize) -> bool {
            false
        }

        fn cost(&self, _state: &usize, action: &usize) -> f64 {
            self.costs[*action].0
        }

        fn heuristic(&self, state: &usize) -> f64 {
            self.costs[*state].1
        }
    }

    fn populate<F: Frontier>(costs: Vec<(f64, f64)>) -> (F, NodeArena<usize, usize>) {
        let problem = Fixed { costs };
        let mut arena = NodeArena::new();
        let root = SearchNode::root(0);
        let root_id = arena.insert(root.clone()).unwrap();
        let mut frontier = F::default();

        for action in problem.actions(&0) {
            let child = SearchNode::child(&problem, root_id, &root, action, true);
            let id = arena.insert(child).unwrap();
            frontier.push(id, arena.get(id)).unwrap();
        }
        (frontier, arena)
    }

    fn drain<F: Frontier>(frontier: &mut F, arena: &NodeArena<usize, usize>) -> Vec<usize> {
        let mut order = vec![];
        while let Some(id) = frontier.pop() {
            order.push(*arena.get(id).state());
        }
        order
    }

    #[test]
    fn test_fifo_pops_oldest_first() {
        let (mut frontier, arena) =
            populate::<FifoFrontier>(vec![(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier, &arena), vec![1, 2, 3]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lifo_pops_newest_first() {
        let (mut frontier, arena) =
            populate::<LifoFrontier>(vec![(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(drain(&mut frontier, &arena), vec![3, 2, 1]);
    }

    #[test]
    fn test_cost_frontier_pops_minimum_cost() {
        let (mut frontier, arena) =
            populate::<CostFrontier>(vec![(0.0, 0.0), (3.0, 0.0), (1.0, 9.0), (2.0, 0.0)]);
        assert_eq!(drain(&mut frontier, &arena), vec![2, 3, 1]);
    }

    #[test]
    fn test_estimate_frontier_pops_minimum_f() {
        // f values: 3.0, 10.0, 2.5
        let (mut frontier, arena) =
            populate::<EstimateFrontier>(vec![(0.0, 0.0), (3.0, 0.0), (1.0, 9.0), (2.0, 0.5)]);
        assert_eq!(drain(&mut frontier, &arena), vec![3, 1, 2]);
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let (mut frontier, arena) =
            populate::<CostFrontier>(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 0.0)]);
        assert_eq!(drain(&mut frontier, &arena), vec![1, 2, 3]);
    }

    #[test]
    fn test_replacement_rules() {
        let (mut frontier, arena) =
            populate::<FifoFrontier>(vec![(0.0, 0.0), (1.0, 5.0), (2.0, 1.0)]);
        let cheap_but_far = arena.get(frontier.pop().unwrap());
        let costly_but_near = arena.get(frontier.pop().unwrap());

        assert!(CostFrontier::replaces(cheap_but_far, costly_but_near));
        assert!(!CostFrontier::replaces(costly_but_near, cheap_but_far));
        assert!(EstimateFrontier::replaces(costly_but_near, cheap_but_far));
        assert!(!EstimateFrontier::replaces(cheap_but_far, costly_but_near));
        assert!(!FifoFrontier::replaces(cheap_but_far, costly_but_near));
        assert!(!LifoFrontier::replaces(cheap_but_far, costly_but_near));
        // Equal keys never replace.
        assert!(!CostFrontier::replaces(cheap_but_far, cheap_but_far));
    }

    #[test]
    fn test_push_grows_every_strategy() {
        fn push_twice<F: Frontier>() {
            let mut arena = NodeArena::new();
            let first = arena.insert(SearchNode::<usize, usize>::root(0)).unwrap();
            let second = arena.insert(SearchNode::root(1)).unwrap();
            let mut frontier = F::default();

            assert_eq!(frontier.push(first, arena.get(first)), Ok(()));
            assert_eq!(frontier.push(second, arena.get(second)), Ok(()));
            assert_eq!(frontier.len(), 2, "{}", F::NAME);
        }

        push_twice::<FifoFrontier>();
        push_twice::<LifoFrontier>();
        push_twice::<CostFrontier>();
        push_twice::<EstimateFrontier>();
    }

    #[test]
    fn test_clear_empties_frontier() {
        let (mut frontier, _) =
            populate::<EstimateFrontier>(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
