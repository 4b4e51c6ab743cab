//! Single-agent planning search over a state-action graph.
//!
//! Implement [`SearchProblem`] for a problem, then pick a driver:
//!
//! ```ignore
//! let mut search = Ucs::new(&problem, initial_state);
//! if search.solve()? {
//!     let plan = search.solution();
//! }
//! ```

mod frontier;
mod node;
mod report;
mod search;
mod traits;


pub use frontier::{
    CostFrontier, EstimateFrontier, FifoFrontier, Frontier, LifoFrontier, PathCost,
    PriorityFrontier, PriorityKey, TotalEstimate,
};
pub use node::{NodeArena, NodeId, SearchNode};
pub use report::{run_algorithm, Algorithm, PlanOutcome, PlanReport};
pub use search::{AStar, Bfs, Dfs, SearchLimits, SearchStats, TreeSearch, Ucs};
pub use traits::SearchProblem;
