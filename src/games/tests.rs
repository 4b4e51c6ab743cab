//! Tests for the m,n,k game and its evaluators.
//!
//! Test coverage:
//! - Win detection in every direction, draws and move generation
//! - Line-potential and mark-balance scores
//! - Perfect play on tic-tac-toe from the empty board
//! - Taking wins and blocking losses
//! - AlphaBeta agreeing with MinMax under a heuristic evaluator

use super::*;
use crate::adversarial::{
    play_match, AlphaBetaPlayer, Evaluator, Game, GameState, MinMaxPlayer, Player, Role,
};

fn play(game: &MnkGame, moves: &[(usize, usize)]) -> MnkState {
    moves.iter().fold(game.init(), |state, &(row, col)| {
        game.do_action(&state, &Placement::new(row, col))
    })
}

#[test]
fn test_empty_board() {
    let game = MnkGame::tic_tac_toe();
    let state = game.init();

    assert!(!state.is_final_state());
    assert_eq!(state.player_to_move(), Role::Max);
    assert_eq!(game.actions(&state).len(), 9);
    assert_eq!(game.actions(&state)[0], Placement::new(0, 0));
    assert_eq!(game.actions(&state)[8], Placement::new(2, 2));
    assert_eq!(state.window_counts().len(), 8);
}

#[test]
fn test_window_count_on_larger_board() {
    let game = MnkGame::new(4, 4, 3);
    // 8 horizontal, 8 vertical, 4 on each diagonal.
    assert_eq!(game.init().window_counts().len(), 24);
}

#[test]
fn test_do_action_leaves_state_untouched() {
    let game = MnkGame::tic_tac_toe();
    let state = game.init();
    let next = game.do_action(&state, &Placement::new(1, 1));

    assert_eq!(state.mark_at(1, 1), None);
    assert_eq!(next.mark_at(1, 1), Some(Role::Max));
    assert_eq!(next.player_to_move(), Role::Min);
    assert_eq!(next.placed(), 1);
    assert_eq!(game.actions(&next).len(), 8);
}

#[test]
fn test_row_win() {
    let game = MnkGame::tic_tac_toe();
    let state = play(&game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(state.winner(), Some(Role::Max));
    assert!(state.is_final_state());
    assert_eq!(state.game_value(), WIN_VALUE);
    assert!(game.actions(&state).is_empty());
}

#[test]
fn test_column_win_for_min() {
    let game = MnkGame::tic_tac_toe();
    let state = play(&game, &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 1)]);

    assert_eq!(state.winner(), Some(Role::Min));
    assert_eq!(state.game_value(), -WIN_VALUE);
}

#[test]
fn test_diagonal_wins() {
    let game = MnkGame::tic_tac_toe();
    let main = play(&game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(main.winner(), Some(Role::Max));

    let anti = play(&game, &[(2, 0), (0, 0), (1, 1), (0, 1), (0, 2)]);
    assert_eq!(anti.winner(), Some(Role::Max));
}

#[test]
fn test_short_streak_on_wide_board() {
    let game = MnkGame::new(4, 5, 3);
    let state = play(&game, &[(3, 1), (0, 0), (2, 2), (0, 4), (1, 3)]);
    assert_eq!(state.winner(), Some(Role::Max));

    let not_yet = play(&game, &[(3, 1), (0, 0), (2, 2)]);
    assert_eq!(not_yet.winner(), None);
}

#[test]
fn test_full_board_draw() {
    let game = MnkGame::tic_tac_toe();
    let state = play(
        &game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ],
    );

    assert_eq!(state.winner(), None);
    assert!(state.is_full());
    assert!(state.is_final_state());
    assert_eq!(state.game_value(), 0.0);
    assert_eq!(state.to_string(), "X O X\nX O X\nO X O\n");
}

#[test]
fn test_parse_board() {
    assert_eq!("3,3,3".parse::<MnkGame>(), Ok(MnkGame::tic_tac_toe()));
    assert_eq!(" 7, 6 ,4".parse::<MnkGame>(), Ok(MnkGame::new(7, 6, 4)));
    assert!("3,3".parse::<MnkGame>().is_err());
    assert!("3,3,4".parse::<MnkGame>().is_err());
    assert!("a,3,3".parse::<MnkGame>().is_err());
    assert_eq!(MnkGame::new(5, 5, 4).to_string(), "5,5,4");
    let connect_four = "6,7,4".parse::<MnkGame>().unwrap();
    assert_eq!(
        (connect_four.rows(), connect_four.cols(), connect_four.streak()),
        (6, 7, 4)
    );
}

#[test]
fn test_line_potential_scores() {
    let game = MnkGame::tic_tac_toe();
    let evaluator = LinePotentialEvaluator;

    assert_eq!(evaluator.evaluate(&game.init()), 0.0);

    // The centre sits on four windows, a corner on three.
    assert_eq!(evaluator.evaluate(&play(&game, &[(1, 1)])), 4.0);
    assert_eq!(evaluator.evaluate(&play(&game, &[(0, 0)])), 3.0);

    // O in the corner kills the main diagonal for X and keeps two windows.
    assert_eq!(evaluator.evaluate(&play(&game, &[(1, 1), (0, 0)])), 1.0);

    // Two X marks on the top row weigh 10; O on (2,2) kills the main diagonal.
    let two_in_row = play(&game, &[(0, 0), (2, 2), (0, 1)]);
    let expected = 10.0 + 1.0 + 1.0 - (1.0 + 1.0);
    assert_eq!(evaluator.evaluate(&two_in_row), expected);
}

#[test]
fn test_evaluators_return_game_value_for_won_positions() {
    let game = MnkGame::tic_tac_toe();
    let won = play(&game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(LinePotentialEvaluator.evaluate(&won), WIN_VALUE);
    assert_eq!(MarkBalanceEvaluator.evaluate(&won), WIN_VALUE);
    assert_eq!(MnkEvaluator::MarkBalance.evaluate(&won), WIN_VALUE);
}

#[test]
fn test_mark_balance_scores() {
    let game = MnkGame::tic_tac_toe();
    let evaluator = MarkBalanceEvaluator;

    assert_eq!(evaluator.evaluate(&game.init()), 0.0);
    assert_eq!(evaluator.evaluate(&play(&game, &[(1, 1)])), 1.0);
    assert_eq!(evaluator.evaluate(&play(&game, &[(1, 1), (0, 0)])), 0.0);
}

#[test]
fn test_evaluator_selection() {
    let game = MnkGame::tic_tac_toe();
    let state = play(&game, &[(1, 1)]);

    assert_eq!("lines".parse::<MnkEvaluator>(), Ok(MnkEvaluator::LinePotential));
    assert_eq!("Marks".parse::<MnkEvaluator>(), Ok(MnkEvaluator::MarkBalance));
    assert!("material".parse::<MnkEvaluator>().is_err());
    assert_eq!(MnkEvaluator::LinePotential.evaluate(&state), 4.0);
    assert_eq!(MnkEvaluator::MarkBalance.evaluate(&state), 1.0);
    assert_eq!(MnkEvaluator::LinePotential.to_string(), "lines");
}

#[test]
fn test_tic_tac_toe_is_a_draw_with_perfect_play() {
    let game = MnkGame::tic_tac_toe();
    let state = game.init();

    let mut minmax = MinMaxPlayer::new(Role::Max, 0);
    let minmax_move = minmax.get_move(&game, &state).unwrap();
    assert_eq!(minmax.last_value(), Some(0.0));
    // Every node of the full game tree below the root.
    assert_eq!(Player::<MnkGame>::states_explored(&minmax), 549_945);

    let mut alpha_beta = AlphaBetaPlayer::new(Role::Max, 0);
    let alpha_beta_move = alpha_beta.get_move(&game, &state).unwrap();
    assert_eq!(alpha_beta.last_value(), Some(0.0));
    assert_eq!(minmax_move, alpha_beta_move);
    assert!(
        Player::<MnkGame>::states_explored(&alpha_beta) * 10
            < Player::<MnkGame>::states_explored(&minmax),
        "alpha-beta should prune most of the tic-tac-toe tree"
    );
}

#[test]
fn test_takes_immediate_win() {
    let game = MnkGame::tic_tac_toe();
    let state = play(&game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

    let mut shallow = AlphaBetaPlayer::new(Role::Max, 1).with_evaluator(LinePotentialEvaluator);
    assert_eq!(shallow.get_move(&game, &state), Ok(Placement::new(0, 2)));
    assert_eq!(shallow.last_value(), Some(WIN_VALUE));

    let mut full = MinMaxPlayer::new(Role::Max, 0);
    assert_eq!(full.get_move(&game, &state), Ok(Placement::new(0, 2)));
    assert_eq!(full.last_value(), Some(WIN_VALUE));
}

#[test]
fn test_blocks_immediate_loss() {
    let game = MnkGame::tic_tac_toe();
    let state = play(&game, &[(0, 0), (1, 1), (0, 1)]);
    assert_eq!(state.player_to_move(), Role::Min);

    let mut full = AlphaBetaPlayer::new(Role::Min, 0);
    assert_eq!(full.get_move(&game, &state), Ok(Placement::new(0, 2)));
    assert_eq!(full.last_value(), Some(0.0));

    let mut shallow = MinMaxPlayer::new(Role::Min, 2).with_evaluator(LinePotentialEvaluator);
    assert_eq!(shallow.get_move(&game, &state), Ok(Placement::new(0, 2)));
}

#[test]
fn test_alpha_beta_matches_minmax_with_heuristic() {
    let game = MnkGame::new(4, 4, 3);
    let positions = vec![
        game.init(),
        play(&game, &[(1, 1)]),
        play(&game, &[(1, 1), (2, 2), (1, 2)]),
        play(&game, &[(0, 0), (3, 3), (1, 1), (2, 2), (0, 3)]),
    ];

    for (index, state) in positions.iter().enumerate() {
        let role = state.player_to_move();
        for &evaluator in [MnkEvaluator::LinePotential, MnkEvaluator::MarkBalance].iter() {
            let mut minmax = MinMaxPlayer::new(role, 3).with_evaluator(evaluator);
            let mut alpha_beta = AlphaBetaPlayer::new(role, 3).with_evaluator(evaluator);

            assert_eq!(
                minmax.get_move(&game, state),
                alpha_beta.get_move(&game, state),
                "position {} with {}",
                index,
                evaluator
            );
            assert_eq!(minmax.last_value(), alpha_beta.last_value());
            assert!(
                Player::<MnkGame>::states_explored(&alpha_beta)
                    <= Player::<MnkGame>::states_explored(&minmax)
            );
        }
    }
}

#[test]
fn test_evaluator_duel_runs_to_completion() {
    let game = MnkGame::new(4, 4, 3);
    let mut lines = AlphaBetaPlayer::new(Role::Max, 2).with_evaluator(LinePotentialEvaluator);
    let mut marks = AlphaBetaPlayer::new(Role::Min, 2).with_evaluator(MarkBalanceEvaluator);

    let outcome = play_match(&game, &mut lines, &mut marks).unwrap();
    assert!(outcome.moves.len() <= 16);
    assert_eq!(Role::favoured_by(outcome.final_value), outcome.winner);
}
