//! Seeded grid mazes with weighted terrain.
//!
//! Entering a cell costs its terrain value (at least 1), so the Manhattan
//! distance to the goal never overestimates and is an admissible heuristic.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::planning::SearchProblem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(self, other: Cell) -> usize {
        let rows = if self.row > other.row {
            self.row - other.row
        } else {
            other.row - self.row
        };
        let cols = if self.col > other.col {
            self.col - other.col
        } else {
            other.col - self.col
        };
        rows + cols
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Clone, Debug)]
pub struct GridProblem {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
    terrain: Vec<u8>,
    start: Cell,
    goal: Cell,
}

impl GridProblem {
    /// An empty grid where every step costs 1, from the top-left corner to the
    /// bottom-right one.
    pub fn open(rows: usize, cols: usize) -> Self {
        let size = rows * cols;
        Self {
            rows,
            cols,
            blocked: vec![false; size],
            terrain: vec![1; size],
            start: Cell::new(0, 0),
            goal: Cell::new(rows.saturating_sub(1), cols.saturating_sub(1)),
        }
    }

    /// A grid with each cell walled off with probability `wall_density` and a
    /// terrain cost drawn from `1..=max_terrain_cost`. The same seed always
    /// yields the same maze.
    pub fn random(
        rows: usize,
        cols: usize,
        wall_density: f64,
        max_terrain_cost: u8,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let density = wall_density.max(0.0).min(1.0);
        let max_cost = max_terrain_cost.max(1);

        let mut grid = Self::open(rows, cols);
        for index in 0..rows * cols {
            grid.blocked[index] = rng.gen_bool(density);
            grid.terrain[index] = rng.gen_range(1..=max_cost);
        }

        let (start, goal) = (grid.start, grid.goal);
        grid.set_blocked(start, false);
        grid.set_blocked(goal, false);
        grid
    }

    pub fn with_wall(mut self, cell: Cell) -> Self {
        self.set_blocked(cell, true);
        self
    }

    pub fn with_terrain(mut self, cell: Cell, cost: u8) -> Self {
        if let Some(index) = self.index(cell) {
            self.terrain[index] = cost.max(1);
        }
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.index(cell).map_or(true, |index| self.blocked[index])
    }

    pub fn terrain(&self, cell: Cell) -> Option<u8> {
        self.index(cell).map(|index| self.terrain[index])
    }

    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = match direction {
            Direction::Up => Cell::new(cell.row.checked_sub(1)?, cell.col),
            Direction::Down => Cell::new(cell.row + 1, cell.col),
            Direction::Left => Cell::new(cell.row, cell.col.checked_sub(1)?),
            Direction::Right => Cell::new(cell.row, cell.col + 1),
        };
        if self.is_blocked(next) {
            None
        } else {
            Some(next)
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }

    fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if let Some(index) = self.index(cell) {
            self.blocked[index] = blocked;
        }
    }
}

impl SearchProblem for GridProblem {
    type State = Cell;
    type Action = Direction;

    fn actions(&self, state: &Cell) -> Vec<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|direction| self.neighbour(*state, *direction).is_some())
            .collect()
    }

    fn do_action(&self, state: &Cell, action: &Direction) -> Cell {
        self.neighbour(*state, *action).unwrap_or(*state)
    }

    fn is_goal_state(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    fn cost(&self, state: &Cell, action: &Direction) -> f64 {
        let target = self.do_action(state, action);
        self.terrain(target).map_or(1.0, f64::from)
    }

    fn heuristic(&self, state: &Cell) -> f64 {
        state.manhattan_distance(self.goal) as f64
    }
}

impl fmt::Display for GridProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                let symbol = if cell == self.start {
                    'S'
                } else if cell == self.goal {
                    'G'
                } else if self.is_blocked(cell) {
                    '#'
                } else {
                    match self.terrain(cell) {
                        Some(cost) if cost <= 9 => char::from(b'0' + cost),
                        _ => '+',
                    }
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
