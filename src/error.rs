use thiserror::Error;

/// Failures that are not a normal search outcome.
///
/// Running out of frontier without reaching a goal is *not* an error: `solve`
/// reports it as `Ok(false)`. Only exhausted budgets and a player asked to move
/// from a dead position travel on this channel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("search node budget of {limit} nodes exhausted")]
    NodeLimitExceeded { limit: usize },
    #[error("frontier grew past its budget of {limit} entries")]
    FrontierLimitExceeded { limit: usize },
    #[error("out of memory after generating {nodes} search nodes")]
    OutOfMemory { nodes: usize },
    #[error("game tree exploration budget of {limit} states exhausted")]
    ExplorationLimitExceeded { limit: usize },
}

impl SearchError {
    /// Returns true for the resource-exhaustion family of errors.
    pub fn is_resource_exhaustion(&self) -> bool {
        !matches!(self, SearchError::NoAvailableMoves)
    }

    /// Maps a failed `try_reserve` to `OutOfMemory` with `nodes` generated so far.
    pub(crate) fn out_of_memory<E>(nodes: usize) -> impl FnOnce(E) -> SearchError {
        move |_| SearchError::OutOfMemory { nodes }
    }
}
