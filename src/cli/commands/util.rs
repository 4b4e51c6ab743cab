//! Shared utilities for CLI commands.

use std::fmt;
use std::str::FromStr;

use explore::adversarial::{AlphaBetaPlayer, MinMaxPlayer, Player, RandomPlayer, Role};
use explore::games::{MnkEvaluator, MnkGame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    MinMax,
    AlphaBeta,
    Random,
}

impl FromStr for PlayerKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minmax" => Ok(PlayerKind::MinMax),
            "alphabeta" | "alpha-beta" => Ok(PlayerKind::AlphaBeta),
            "random" => Ok(PlayerKind::Random),
            _ => Err("invalid player; options are: minmax, alphabeta, random"),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PlayerKind::MinMax => "minmax",
            PlayerKind::AlphaBeta => "alphabeta",
            PlayerKind::Random => "random",
        };
        write!(f, "{}", name)
    }
}

pub(crate) fn build_player(
    kind: PlayerKind,
    role: Role,
    depth: i32,
    evaluator: MnkEvaluator,
    seed: u64,
) -> Box<dyn Player<MnkGame>> {
    match kind {
        PlayerKind::MinMax => Box::new(MinMaxPlayer::new(role, depth).with_evaluator(evaluator)),
        PlayerKind::AlphaBeta => {
            Box::new(AlphaBetaPlayer::new(role, depth).with_evaluator(evaluator))
        }
        PlayerKind::Random => Box::new(RandomPlayer::new(role, seed)),
    }
}

pub(crate) fn default_boards() -> Vec<MnkGame> {
    vec![
        MnkGame::tic_tac_toe(),
        MnkGame::new(4, 4, 3),
        MnkGame::new(5, 5, 4),
    ]
}

pub(crate) fn exit_with(error: impl fmt::Display) -> ! {
    eprintln!("error: {}", error);
    std::process::exit(1);
}
