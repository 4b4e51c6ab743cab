//! Search tree nodes and the arena that owns them.
//!
//! Nodes live in a `NodeArena` for the duration of one `solve` call and refer to
//! their parent by `NodeId`. The parent link is only ever followed to rebuild
//! the action path from a goal back to the root.

use super::SearchProblem;
use crate::error::SearchError;

/// Index of a node inside its `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct SearchNode<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    cost: f64,
    heuristic: f64,
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Builds a root node: no parent, no action, g = 0, depth = 0.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            cost: 0.0,
            heuristic: 0.0,
            depth: 0,
        }
    }

    /// Builds a root node whose heuristic is taken from `problem`.
    pub fn informed_root<P>(problem: &P, state: S) -> Self
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let heuristic = problem.heuristic(&state);
        debug_assert!(heuristic >= 0.0, "negative heuristic {}", heuristic);
        Self {
            heuristic,
            ..Self::root(state)
        }
    }

    /// Builds the child reached from `parent` (stored at `parent_id`) by `action`.
    /// The heuristic is only evaluated when `informed` is set.
    pub fn child<P>(
        problem: &P,
        parent_id: NodeId,
        parent: &SearchNode<S, A>,
        action: A,
        informed: bool,
    ) -> Self
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let step_cost = problem.cost(&parent.state, &action);
        debug_assert!(step_cost >= 0.0, "negative action cost {}", step_cost);

        let state = problem.do_action(&parent.state, &action);
        let heuristic = if informed {
            problem.heuristic(&state)
        } else {
            0.0
        };
        debug_assert!(heuristic >= 0.0, "negative heuristic {}", heuristic);

        Self {
            state,
            parent: Some(parent_id),
            action: Some(action),
            cost: parent.cost + step_cost,
            heuristic,
            depth: parent.depth + 1,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated path cost g(n).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Heuristic estimate h(n). Always 0 for uninformed searches.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// f(n) = g(n) + h(n).
    pub fn estimate(&self) -> f64 {
        self.cost + self.heuristic
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owns every node kept by one search.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S, A> NodeArena<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stores `node`, failing instead of aborting when the arena cannot grow.
    pub fn insert(&mut self, node: SearchNode<S, A>) -> Result<NodeId, SearchError> {
        self.nodes
            .try_reserve(1)
            .map_err(SearchError::out_of_memory(self.nodes.len()))?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    /// Walks parent links from `id` back to the root and returns the actions in
    /// root-to-node order.
    pub fn path_to(&self, id: NodeId) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions = Vec::with_capacity(self.get(id).depth);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(action) = node.action() {
                actions.push(action.clone());
            }
            current = node.parent;
        }
        actions.reverse();
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk along a number line; each step costs the absolute distance moved.
    struct Line;

    impl SearchProblem for Line {
        type State = i32;
        type Action = i32;

        fn actions(&self, _state: &i32) -> Vec<i32> {
            vec![-1, 2]
        }

        fn do_action(&self, state: &i32, action: &i32) -> i32 {
            state + action
        }

        fn is_goal_state(&self, state: &i32) -> bool {
            *state == 5
        }

        fn cost(&self, _state: &i32, action: &i32) -> f64 {
            action.abs() as f64
        }

        fn heuristic(&self, state: &i32) -> f64 {
            (5 - state).abs() as f64 / 2.0
        }
    }

    #[test]
    fn test_child_accumulates_cost_and_depth() {
        let root = SearchNode::root(0);
        let mut arena = NodeArena::new();
        let root_id = arena.insert(root.clone()).unwrap();

        let child = SearchNode::child(&Line, root_id, &root, 2, true);
        assert_eq!(*child.state(), 2);
        assert_eq!(child.cost(), 2.0);
        assert_eq!(child.depth(), 1);
        assert_eq!(child.heuristic(), 1.5);
        assert_eq!(child.estimate(), 3.5);
        assert_eq!(child.parent(), Some(root_id));
        assert!(root.is_root());
        assert!(!child.is_root());
    }

    #[test]
    fn test_uninformed_child_has_no_heuristic() {
        let root = SearchNode::root(0);
        let mut arena = NodeArena::new();
        let root_id = arena.insert(root.clone()).unwrap();

        let child = SearchNode::child(&Line, root_id, &root, -1, false);
        assert_eq!(child.heuristic(), 0.0);
        assert_eq!(child.estimate(), child.cost());
    }

    #[test]
    fn test_path_to_reconstructs_actions_in_order() {
        let mut arena = NodeArena::new();
        let root = SearchNode::root(0);
        let mut current_id = arena.insert(root).unwrap();

        for action in [2, 2, -1, 2].iter() {
            let parent = arena.get(current_id).clone();
            let child = SearchNode::child(&Line, current_id, &parent, *action, false);
            current_id = arena.insert(child).unwrap();
        }

        assert_eq!(arena.path_to(current_id), vec![2, 2, -1, 2]);
        assert_eq!(*arena.get(current_id).state(), 5);
        assert_eq!(arena.get(current_id).cost(), 7.0);
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn test_path_to_root_is_empty() {
        let mut arena: NodeArena<i32, i32> = NodeArena::new();
        let root_id = arena.insert(SearchNode::root(0)).unwrap();
        assert!(arena.path_to(root_id).is_empty());
    }
}
