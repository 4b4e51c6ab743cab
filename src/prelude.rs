//! Common types re-exported for convenience.

pub use crate::adversarial::{
    play_match, AlphaBetaPlayer, Evaluator, Game, GameState, MinMaxPlayer, Player, RandomPlayer,
    Role,
};
pub use crate::error::SearchError;
pub use crate::planning::{
    run_algorithm, AStar, Algorithm, Bfs, Dfs, SearchLimits, SearchProblem, TreeSearch, Ucs,
};
