//! Pluggable exploration engine: single-agent planning search (BFS, DFS, UCS,
//! A*) and two-player zero-sum game-tree search (MinMax, AlphaBeta).

pub mod adversarial;
pub mod error;
pub mod games;
pub mod planning;
pub mod prelude;
pub mod problems;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
