//! Two-player zero-sum game-tree search.

mod play;
mod player;
mod random;
mod search;
mod traits;


pub use play::{play_from, play_match, MatchOutcome};
pub use player::{AlphaBetaPlayer, Exhaustive, MinMaxPlayer, Pruned, SearchMode, SearchPlayer};
pub use random::RandomPlayer;
pub use search::{Decision, DepthLimit, ExplorationCounter, Pruning, TreeWalker};
pub use traits::{Evaluator, Game, GameState, GameValueEvaluator, Player, Role};
