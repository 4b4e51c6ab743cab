//! Duel command - pit two evaluators against each other.

use explore::adversarial::{play_match, AlphaBetaPlayer, Role};
use explore::games::{MnkEvaluator, MnkGame};
use structopt::StructOpt;

use super::util::exit_with;
use super::Command;

#[derive(StructOpt)]
pub struct DuelArgs {
    #[structopt(long, default_value = "4,4,3")]
    pub board: MnkGame,
    #[structopt(short, long, default_value = "4")]
    pub depth: i32,
    #[structopt(short, long, default_value = "10")]
    pub games: usize,
    #[structopt(long, default_value = "lines")]
    pub first: MnkEvaluator,
    #[structopt(long, default_value = "marks")]
    pub second: MnkEvaluator,
}

impl Command for DuelArgs {
    fn execute(self) {
        let mut first_wins = 0;
        let mut second_wins = 0;
        let mut draws = 0;

        for round in 0..self.games {
            // The first evaluator plays MAX, and so moves first, in even rounds.
            let first_is_max = round % 2 == 0;
            let (max_evaluator, min_evaluator) = if first_is_max {
                (self.first, self.second)
            } else {
                (self.second, self.first)
            };

            let mut max_player =
                AlphaBetaPlayer::new(Role::Max, self.depth).with_evaluator(max_evaluator);
            let mut min_player =
                AlphaBetaPlayer::new(Role::Min, self.depth).with_evaluator(min_evaluator);
            let outcome = play_match(&self.board, &mut max_player, &mut min_player)
                .unwrap_or_else(|e| exit_with(e));

            match (outcome.winner, first_is_max) {
                (None, _) => draws += 1,
                (Some(Role::Max), true) | (Some(Role::Min), false) => first_wins += 1,
                _ => second_wins += 1,
            }
            println!(
                "game {:>3}: {} (X) vs {} (O), {} in {} moves",
                round + 1,
                max_evaluator,
                min_evaluator,
                outcome
                    .winner
                    .map_or("draw".to_string(), |role| format!("{} wins", role)),
                outcome.moves.len()
            );
        }

        println!(
            "\n{} on {} at depth {}: {} wins, {} losses, {} draws against {}",
            self.first, self.board, self.depth, first_wins, second_wins, draws, self.second
        );
    }
}
