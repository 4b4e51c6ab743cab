//! Runs a chosen algorithm on a problem and summarises the result, for the
//! benchmark harness and the CLI.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::frontier::Frontier;
use super::search::{AStar, Bfs, Dfs, SearchLimits, SearchStats, TreeSearch, Ucs};
use super::SearchProblem;
use crate::error::SearchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStar,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::AStar => "astar",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err("invalid algorithm; options are: bfs, dfs, ucs, astar"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    Solved { cost: f64, length: usize },
    Exhausted,
    Aborted(SearchError),
}

#[derive(Clone, Debug)]
pub struct PlanReport {
    pub algorithm: Algorithm,
    pub outcome: PlanOutcome,
    pub stats: SearchStats,
    pub explored: usize,
    pub elapsed: Duration,
}

impl PlanReport {
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, PlanOutcome::Solved { .. })
    }

    pub fn cost(&self) -> Option<f64> {
        match self.outcome {
            PlanOutcome::Solved { cost, .. } => Some(cost),
            _ => None,
        }
    }

    pub fn length(&self) -> Option<usize> {
        match self.outcome {
            PlanOutcome::Solved { length, .. } => Some(length),
            _ => None,
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let result = match &self.outcome {
            PlanOutcome::Solved { cost, length } => {
                format!("solved, cost={:.2}, len={}", cost, length)
            }
            PlanOutcome::Exhausted => "no solution".to_string(),
            PlanOutcome::Aborted(error) => format!("aborted: {}", error),
        };
        write!(
            f,
            "{:<6} {:>8.2} ms, {:>8} expanded, {:>8} generated, max depth {:>5}, {}",
            self.algorithm.to_string(),
            self.elapsed.as_secs_f64() * 1000.0,
            self.stats.expanded,
            self.stats.generated,
            self.stats.max_depth,
            result
        )
    }
}

/// Runs `algorithm` on a borrowed problem from `initial_state`.
pub fn run_algorithm<P: SearchProblem>(
    problem: &P,
    initial_state: P::State,
    algorithm: Algorithm,
    limits: SearchLimits,
) -> PlanReport {
    match algorithm {
        Algorithm::Bfs => report(
            algorithm,
            Bfs::with_limits(problem, initial_state, limits),
        ),
        Algorithm::Dfs => report(
            algorithm,
            Dfs::with_limits(problem, initial_state, limits),
        ),
        Algorithm::Ucs => report(
            algorithm,
            Ucs::with_limits(problem, initial_state, limits),
        ),
        Algorithm::AStar => report(
            algorithm,
            AStar::with_limits(problem, initial_state, limits),
        ),
    }
}

fn report<P: SearchProblem, F: Frontier>(
    algorithm: Algorithm,
    mut search: TreeSearch<P, F>,
) -> PlanReport {
    let outcome = match search.solve() {
        Ok(true) => PlanOutcome::Solved {
            cost: search.end_node().map_or(0.0, |node| node.cost()),
            length: search.end_node().map_or(0, |node| node.depth()),
        },
        Ok(false) => PlanOutcome::Exhausted,
        Err(error) => PlanOutcome::Aborted(error),
    };

    PlanReport {
        algorithm,
        outcome,
        stats: search.stats(),
        explored: search.explored_count(),
        elapsed: search.last_duration().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_round_trips_through_strings() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(
                algorithm.to_string().parse::<Algorithm>(),
                Ok(*algorithm),
                "{} did not parse back",
                algorithm
            );
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("greedy".parse::<Algorithm>().is_err());
    }
}
