//! Explicit weighted digraph with named vertices.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::planning::SearchProblem;

/// Following an edge is the only kind of action.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub to: String,
    pub cost: f64,
}

/// A graph built edge by edge. Edges leave a vertex in insertion order, which
/// is the order searches consider them in.
#[derive(Clone, Debug, Default)]
pub struct GraphProblem {
    edges: FxHashMap<String, Vec<Edge>>,
    goals: FxHashSet<String>,
    estimates: FxHashMap<String, f64>,
}

impl GraphProblem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(mut self, from: &str, to: &str, cost: f64) -> Self {
        self.edges.entry(from.to_string()).or_default().push(Edge {
            to: to.to_string(),
            cost,
        });
        self
    }

    /// Adds an edge in each direction.
    pub fn undirected_edge(self, a: &str, b: &str, cost: f64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    pub fn goal(mut self, vertex: &str) -> Self {
        self.goals.insert(vertex.to_string());
        self
    }

    /// Sets the heuristic value of `vertex`. Unset vertices estimate 0.
    pub fn estimate(mut self, vertex: &str, value: f64) -> Self {
        self.estimates.insert(vertex.to_string(), value);
        self
    }

    /// Sum of edge costs along `path`.
    pub fn path_cost(&self, path: &[Edge]) -> f64 {
        path.iter().map(|edge| edge.cost).sum()
    }
}

impl SearchProblem for GraphProblem {
    type State = String;
    type Action = Edge;

    fn actions(&self, state: &String) -> Vec<Edge> {
        self.edges.get(state).cloned().unwrap_or_default()
    }

    fn do_action(&self, _state: &String, action: &Edge) -> String {
        action.to.clone()
    }

    fn is_goal_state(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn cost(&self, _state: &String, action: &Edge) -> f64 {
        action.cost
    }

    fn heuristic(&self, state: &String) -> f64 {
        self.estimates.get(state).copied().unwrap_or(0.0)
    }
}

/// Renders a path as `S -> A -> G`.
pub fn describe_path(start: &str, path: &[Edge]) -> String {
    std::iter::once(start)
        .chain(path.iter().map(|edge| edge.to.as_str()))
        .collect::<Vec<_>>()
        .join(" -> ")
}
