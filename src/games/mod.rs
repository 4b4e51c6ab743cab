//! Concrete games for the adversarial players.

mod evaluate;
mod mnk;

#[cfg(test)]
mod tests;

pub use evaluate::{LinePotentialEvaluator, MarkBalanceEvaluator, MnkEvaluator, LINE_WEIGHTS};
pub use mnk::{MnkGame, MnkState, Placement, WIN_VALUE};
