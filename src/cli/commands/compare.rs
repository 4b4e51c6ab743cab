//! Compare command - states explored by MinMax and AlphaBeta for the same move.

use std::time::Instant;

use explore::adversarial::{AlphaBetaPlayer, Game, MinMaxPlayer, Player, Role};
use explore::games::{MnkEvaluator, MnkGame};
use log::warn;
use structopt::StructOpt;

use super::util::{default_boards, exit_with};
use super::Command;

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(long = "board", help = "rows,cols,streak; may be repeated")]
    pub boards: Vec<MnkGame>,
    #[structopt(long, default_value = "4")]
    pub max_depth: i32,
    #[structopt(short, long, default_value = "lines")]
    pub evaluator: MnkEvaluator,
}

impl Command for CompareArgs {
    fn execute(self) {
        let boards = if self.boards.is_empty() {
            default_boards()
        } else {
            self.boards
        };

        println!(
            "{:<8} {:>5} {:>12} {:>12} {:>9} {:>10} {:>10}",
            "board", "depth", "minmax", "alphabeta", "pruned", "mm (ms)", "ab (ms)"
        );
        for game in boards {
            let state = game.init();
            for depth in 1..=self.max_depth.max(1) {
                let mut minmax = MinMaxPlayer::new(Role::Max, depth).with_evaluator(self.evaluator);
                let mut alpha_beta =
                    AlphaBetaPlayer::new(Role::Max, depth).with_evaluator(self.evaluator);

                let started = Instant::now();
                let minmax_move = minmax
                    .get_move(&game, &state)
                    .unwrap_or_else(|e| exit_with(e));
                let minmax_elapsed = started.elapsed();

                let started = Instant::now();
                let alpha_beta_move = alpha_beta
                    .get_move(&game, &state)
                    .unwrap_or_else(|e| exit_with(e));
                let alpha_beta_elapsed = started.elapsed();

                if minmax_move != alpha_beta_move {
                    warn!(
                        "{} depth {}: minmax chose {} but alphabeta chose {}",
                        game,
                        depth,
                        minmax_move,
                        alpha_beta_move
                    );
                }

                let explored_minmax = Player::<MnkGame>::states_explored(&minmax);
                let explored_alpha_beta = Player::<MnkGame>::states_explored(&alpha_beta);
                let pruned =
                    100.0 * (1.0 - explored_alpha_beta as f64 / explored_minmax.max(1) as f64);
                println!(
                    "{:<8} {:>5} {:>12} {:>12} {:>8.1}% {:>10.2} {:>10.2}",
                    game.to_string(),
                    depth,
                    explored_minmax,
                    explored_alpha_beta,
                    pruned,
                    minmax_elapsed.as_secs_f64() * 1000.0,
                    alpha_beta_elapsed.as_secs_f64() * 1000.0
                );
            }
        }
    }
}
