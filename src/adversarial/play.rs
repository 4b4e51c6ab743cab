//! Plays a full game between two players.

use log::{debug, info};

use super::traits::{Game, GameState, Player, Role};
use crate::error::SearchError;

#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome<A> {
    /// The side the final game value favours, `None` for a draw.
    pub winner: Option<Role>,
    pub final_value: f64,
    pub moves: Vec<A>,
    /// Total states explored by the MAX player over the whole game.
    pub max_explored: usize,
    /// Total states explored by the MIN player over the whole game.
    pub min_explored: usize,
}

/// Alternates `max_player` and `min_player` from `game.init()` until a final
/// state is reached, asking whichever side the state says is to move.
pub fn play_match<G: Game>(
    game: &G,
    max_player: &mut dyn Player<G>,
    min_player: &mut dyn Player<G>,
) -> Result<MatchOutcome<G::Action>, SearchError> {
    play_from(game, game.init(), max_player, min_player)
}

/// Like `play_match`, starting from an arbitrary position.
pub fn play_from<G: Game>(
    game: &G,
    mut state: G::State,
    max_player: &mut dyn Player<G>,
    min_player: &mut dyn Player<G>,
) -> Result<MatchOutcome<G::Action>, SearchError> {
    debug_assert_eq!(max_player.role(), Role::Max, "max_player must play MAX");
    debug_assert_eq!(min_player.role(), Role::Min, "min_player must play MIN");

    let mut moves = Vec::new();
    let mut max_explored = 0;
    let mut min_explored = 0;

    while !state.is_final_state() {
        let mover = state.player_to_move();
        let action = match mover {
            Role::Max => {
                let action = max_player.get_move(game, &state)?;
                max_explored += max_player.states_explored();
                action
            }
            Role::Min => {
                let action = min_player.get_move(game, &state)?;
                min_explored += min_player.states_explored();
                action
            }
        };
        debug!("{} plays {:?}", mover, action);
        state = game.do_action(&state, &action);
        moves.push(action);
    }

    let final_value = state.game_value();
    let winner = Role::favoured_by(final_value);
    info!(
        "{} vs {}: {} after {} moves",
        max_player.name(),
        min_player.name(),
        winner.map_or("draw".to_string(), |role| format!("{} wins", role)),
        moves.len()
    );

    Ok(MatchOutcome {
        winner,
        final_value,
        moves,
        max_explored,
        min_explored,
    })
}
