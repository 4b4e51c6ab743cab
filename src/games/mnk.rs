//! The m,n,k game: two players take turns placing marks on an m x n board and
//! the first to line up k in a row (horizontally, vertically or diagonally)
//! wins. Tic-tac-toe is the 3,3,3 game.
//!
//! MAX places `X` and moves first, MIN places `O`.

use std::fmt;
use std::str::FromStr;

use crate::adversarial::{Game, GameState, Role};

/// Game value of a position won by MAX. MIN wins score the negation.
pub const WIN_VALUE: f64 = 1_000_000.0;

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MnkGame {
    rows: usize,
    cols: usize,
    streak: usize,
}

impl MnkGame {
    /// Panics if the board is empty or `streak` cannot fit on it.
    pub fn new(rows: usize, cols: usize, streak: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one cell");
        assert!(
            streak > 0 && streak <= rows.max(cols),
            "streak {} does not fit on a {}x{} board",
            streak,
            rows,
            cols
        );
        Self { rows, cols, streak }
    }

    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn streak(&self) -> usize {
        self.streak
    }
}

impl fmt::Display for MnkGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.rows, self.cols, self.streak)
    }
}

/// Parses `rows,cols,streak`, e.g. `3,3,3`.
impl FromStr for MnkGame {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts = input
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid board '{}': {}", input, e))?;

        match parts.as_slice() {
            &[rows, cols, streak] => {
                if rows == 0 || cols == 0 || streak == 0 || streak > rows.max(cols) {
                    return Err(format!(
                        "invalid board '{}': streak must fit on a non-empty board",
                        input
                    ));
                }
                Ok(MnkGame::new(rows, cols, streak))
            }
            _ => Err(format!("invalid board '{}': expected rows,cols,streak", input)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MnkState {
    rows: usize,
    cols: usize,
    streak: usize,
    board: Vec<Option<Role>>,
    to_move: Role,
    winner: Option<Role>,
    placed: usize,
}

impl MnkState {
    fn empty(game: &MnkGame) -> Self {
        Self {
            rows: game.rows,
            cols: game.cols,
            streak: game.streak,
            board: vec![None; game.rows * game.cols],
            to_move: Role::Max,
            winner: None,
            placed: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mark_at(&self, row: usize, col: usize) -> Option<Role> {
        self.board[row * self.cols + col]
    }

    pub fn winner(&self) -> Option<Role> {
        self.winner
    }

    /// Number of marks on the board.
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn is_full(&self) -> bool {
        self.placed == self.board.len()
    }

    /// Counts `(MAX marks, MIN marks)` in every window of `streak` consecutive
    /// cells that fits on the board, in all four directions.
    pub fn window_counts(&self) -> Vec<(usize, usize)> {
        let mut counts = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                for &direction in DIRECTIONS.iter() {
                    if let Some(count) = self.count_window(row, col, direction) {
                        counts.push(count);
                    }
                }
            }
        }
        counts
    }

    fn offset(&self, row: usize, col: usize, (dr, dc): (isize, isize), k: isize) -> Option<usize> {
        let r = row as isize + dr * k;
        let c = col as isize + dc * k;
        if r < 0 || c < 0 || r >= self.rows as isize || c >= self.cols as isize {
            return None;
        }
        Some(r as usize * self.cols + c as usize)
    }

    /// `None` if the window starting at (row, col) leaves the board.
    fn count_window(
        &self,
        row: usize,
        col: usize,
        direction: (isize, isize),
    ) -> Option<(usize, usize)> {
        let mut max_marks = 0;
        let mut min_marks = 0;
        for k in 0..self.streak as isize {
            match self.board[self.offset(row, col, direction, k)?] {
                Some(Role::Max) => max_marks += 1,
                Some(Role::Min) => min_marks += 1,
                None => {}
            }
        }
        Some((max_marks, min_marks))
    }

    /// Length of the run of `role` marks through (row, col) along `direction`.
    fn run_length(&self, row: usize, col: usize, direction: (isize, isize), role: Role) -> usize {
        let mut length = 1;
        for &sign in [1isize, -1].iter() {
            let mut k = 1;
            while let Some(index) = self.offset(row, col, (direction.0 * sign, direction.1 * sign), k)
            {
                if self.board[index] != Some(role) {
                    break;
                }
                length += 1;
                k += 1;
            }
        }
        length
    }

    fn place(&mut self, placement: Placement) {
        let index = placement.row * self.cols + placement.col;
        debug_assert!(self.board[index].is_none(), "cell {} is taken", placement);

        let role = self.to_move;
        self.board[index] = Some(role);
        self.placed += 1;
        self.to_move = role.opponent();

        let completes_line = DIRECTIONS.iter().any(|&direction| {
            self.run_length(placement.row, placement.col, direction, role) >= self.streak
        });
        if completes_line {
            self.winner = Some(role);
        }
    }
}

impl GameState for MnkState {
    fn is_final_state(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    fn game_value(&self) -> f64 {
        match self.winner {
            Some(Role::Max) => WIN_VALUE,
            Some(Role::Min) => -WIN_VALUE,
            None => 0.0,
        }
    }

    fn player_to_move(&self) -> Role {
        self.to_move
    }
}

impl fmt::Display for MnkState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.mark_at(row, col) {
                    Some(Role::Max) => 'X',
                    Some(Role::Min) => 'O',
                    None => '.',
                };
                write!(f, "{}", symbol)?;
                if col + 1 < self.cols {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Game for MnkGame {
    type State = MnkState;
    type Action = Placement;

    fn init(&self) -> MnkState {
        MnkState::empty(self)
    }

    /// Empty cells in row-major order, none once the game is over.
    fn actions(&self, state: &MnkState) -> Vec<Placement> {
        if state.is_final_state() {
            return vec![];
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Placement::new(index / state.cols, index % state.cols))
            .collect()
    }

    fn do_action(&self, state: &MnkState, action: &Placement) -> MnkState {
        let mut next = state.clone();
        next.place(*action);
        next
    }
}
