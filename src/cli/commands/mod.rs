//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod compare;
pub mod duel;
pub mod plan;
pub mod play;

// Shared utilities for commands
pub(crate) mod util;
