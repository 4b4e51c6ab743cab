//! Concrete planning problems used by the benchmarks, the CLI and the tests.

pub mod graph;
pub mod grid;

pub use graph::{describe_path, Edge, GraphProblem};
pub use grid::{Cell, Direction, GridProblem};
