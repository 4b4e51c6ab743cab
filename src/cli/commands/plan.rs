//! Plan command - solve a seeded random maze with the planning algorithms.

use explore::planning::{run_algorithm, Algorithm, SearchLimits};
use explore::problems::GridProblem;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PlanArgs {
    #[structopt(long, default_value = "40")]
    pub rows: usize,
    #[structopt(long, default_value = "40")]
    pub cols: usize,
    #[structopt(
        long,
        default_value = "0.25",
        help = "Probability that a cell is a wall"
    )]
    pub walls: f64,
    #[structopt(long, default_value = "5", help = "Highest terrain cost of a cell")]
    pub max_cost: u8,
    #[structopt(long, default_value = "42")]
    pub seed: u64,
    #[structopt(short, long)]
    pub algorithm: Option<Algorithm>,
    #[structopt(long, help = "Abort a search after this many nodes")]
    pub max_nodes: Option<usize>,
    #[structopt(long, help = "Print the maze before solving it")]
    pub show: bool,
}

impl Command for PlanArgs {
    fn execute(self) {
        let grid = GridProblem::random(self.rows, self.cols, self.walls, self.max_cost, self.seed);
        if self.show {
            println!("{}", grid);
        }

        let limits = SearchLimits {
            max_nodes: self.max_nodes,
            ..SearchLimits::default()
        };
        let algorithms = match self.algorithm {
            Some(algorithm) => vec![algorithm],
            None => Algorithm::ALL.to_vec(),
        };

        println!(
            "{}x{} maze, seed {}, from {} to {}",
            grid.rows(),
            grid.cols(),
            self.seed,
            grid.start(),
            grid.goal()
        );
        for algorithm in algorithms {
            println!("{}", run_algorithm(&grid, grid.start(), algorithm, limits));
        }
    }
}
