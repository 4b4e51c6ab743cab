//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    compare::CompareArgs, duel::DuelArgs, plan::PlanArgs, play::PlayArgs, Command,
};

#[derive(StructOpt)]
#[structopt(
    name = "explore",
    about = "Planning search (BFS, DFS, UCS, A*) and game-tree search (MinMax, AlphaBeta) on toy problems"
)]
pub enum Explore {
    #[structopt(
        name = "plan",
        about = "Generate a random maze from `--seed` and solve it with every planning algorithm, or only the one given with `--algorithm`. Reports time, expanded and generated nodes, and the cost of the path found."
    )]
    Plan(PlanArgs),
    #[structopt(
        name = "compare",
        about = "Count the states MinMax and AlphaBeta explore to choose the first move on each `--board` (rows,cols,streak; default: 3,3,3 4,4,3 5,5,4) for depths 1 to `--max-depth` (default: 4)."
    )]
    Compare(CompareArgs),
    #[structopt(
        name = "duel",
        about = "Play `--games` (default: 10) AlphaBeta matches between two evaluators on an m,n,k `--board`, alternating which evaluator moves first."
    )]
    Duel(DuelArgs),
    #[structopt(
        name = "play",
        about = "Watch two players (minmax, alphabeta or random) play each other on an m,n,k `--board` (default: 3,3,3)."
    )]
    Play(PlayArgs),
}

impl Command for Explore {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Plan(cmd),
            Compare(cmd),
            Duel(cmd),
            Play(cmd),
        }
    }
}
