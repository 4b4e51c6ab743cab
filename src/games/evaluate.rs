//! Position evaluators for the m,n,k game. Both score from MAX's point of view
//! and fall back to the exact game value once someone has won.

use std::fmt;
use std::str::FromStr;

use super::mnk::MnkState;
use crate::adversarial::{Evaluator, GameState, Role};

/// Score of a window holding `n` marks of one side and none of the other.
/// Windows with more marks than the table covers use the last entry.
pub const LINE_WEIGHTS: [f64; 7] = [0.0, 1.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0];

fn line_weight(marks: usize) -> f64 {
    LINE_WEIGHTS[marks.min(LINE_WEIGHTS.len() - 1)]
}

/// Sums, over every window of `streak` cells, the weight of the side that can
/// still complete it. A window holding marks of both sides is dead and scores
/// nothing for either.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinePotentialEvaluator;

impl Evaluator<MnkState> for LinePotentialEvaluator {
    fn evaluate(&self, state: &MnkState) -> f64 {
        if state.winner().is_some() {
            return state.game_value();
        }

        state
            .window_counts()
            .into_iter()
            .map(|(max_marks, min_marks)| match (max_marks, min_marks) {
                (x, 0) => line_weight(x),
                (0, o) => -line_weight(o),
                _ => 0.0,
            })
            .sum()
    }
}

/// Counts MAX marks minus MIN marks.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkBalanceEvaluator;

impl Evaluator<MnkState> for MarkBalanceEvaluator {
    fn evaluate(&self, state: &MnkState) -> f64 {
        if state.winner().is_some() {
            return state.game_value();
        }

        let mut balance = 0.0;
        for row in 0..state.rows() {
            for col in 0..state.cols() {
                match state.mark_at(row, col) {
                    Some(Role::Max) => balance += 1.0,
                    Some(Role::Min) => balance -= 1.0,
                    None => {}
                }
            }
        }
        balance
    }
}

/// Selects one of the m,n,k evaluators at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MnkEvaluator {
    LinePotential,
    MarkBalance,
}

impl Evaluator<MnkState> for MnkEvaluator {
    fn evaluate(&self, state: &MnkState) -> f64 {
        match self {
            MnkEvaluator::LinePotential => LinePotentialEvaluator.evaluate(state),
            MnkEvaluator::MarkBalance => MarkBalanceEvaluator.evaluate(state),
        }
    }
}

impl fmt::Display for MnkEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MnkEvaluator::LinePotential => write!(f, "lines"),
            MnkEvaluator::MarkBalance => write!(f, "marks"),
        }
    }
}

impl FromStr for MnkEvaluator {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "lines" | "line-potential" => Ok(MnkEvaluator::LinePotential),
            "marks" | "mark-balance" => Ok(MnkEvaluator::MarkBalance),
            other => Err(format!(
                "unknown evaluator '{}', expected 'lines' or 'marks'",
                other
            )),
        }
    }
}
