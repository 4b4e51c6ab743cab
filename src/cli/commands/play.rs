//! Play command - watch two players on an m,n,k board.

use std::time::Duration;

use explore::adversarial::{play_match, Game, Player, Role};
use explore::games::{MnkEvaluator, MnkGame};
use structopt::StructOpt;

use super::util::{build_player, exit_with, PlayerKind};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(long, default_value = "3,3,3")]
    pub board: MnkGame,
    #[structopt(long = "max", default_value = "alphabeta")]
    pub max_player: PlayerKind,
    #[structopt(long = "min", default_value = "random")]
    pub min_player: PlayerKind,
    #[structopt(short, long, default_value = "4", help = "Search depth; 0 searches to the end")]
    pub depth: i32,
    #[structopt(short, long, default_value = "lines")]
    pub evaluator: MnkEvaluator,
    #[structopt(long, default_value = "7")]
    pub seed: u64,
    #[structopt(
        long = "delay",
        default_value = "300",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for PlayArgs {
    fn execute(self) {
        let game = self.board;
        let mut max_player =
            build_player(self.max_player, Role::Max, self.depth, self.evaluator, self.seed);
        let mut min_player = build_player(
            self.min_player,
            Role::Min,
            self.depth,
            self.evaluator,
            self.seed.wrapping_add(1),
        );

        let outcome = play_match(&game, max_player.as_mut(), min_player.as_mut())
            .unwrap_or_else(|e| exit_with(e));

        let mut state = game.init();
        println!("{}", state);
        for (ply, placement) in outcome.moves.iter().enumerate() {
            std::thread::sleep(Duration::from_millis(self.delay_ms));
            let mover = if ply % 2 == 0 { "X" } else { "O" };
            state = game.do_action(&state, placement);
            println!("{} plays {}\n{}", mover, placement, state);
        }

        let result = match outcome.winner {
            Some(Role::Max) => format!("{} (X) wins", max_player.name()),
            Some(Role::Min) => format!("{} (O) wins", min_player.name()),
            None => "draw".to_string(),
        };
        println!(
            "{}; {} explored {} states, {} explored {} states",
            result,
            max_player.name(),
            outcome.max_explored,
            min_player.name(),
            outcome.min_explored
        );
    }
}
