use explore::adversarial::{AlphaBetaPlayer, Game, MinMaxPlayer, Player, Role};
use explore::games::{LinePotentialEvaluator, MnkGame};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minmax 4x4x3 depth 3", |b| {
        b.iter(|| first_move_minmax(MnkGame::new(4, 4, 3), 3))
    });
    c.bench_function("alpha beta 4x4x3 depth 3", |b| {
        b.iter(|| first_move_alpha_beta(MnkGame::new(4, 4, 3), 3))
    });
    c.bench_function("alpha beta tic-tac-toe full depth", |b| {
        b.iter(|| first_move_alpha_beta(MnkGame::tic_tac_toe(), 0))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn first_move_minmax(game: MnkGame, depth: i32) -> usize {
    let mut player = MinMaxPlayer::new(Role::Max, depth).with_evaluator(LinePotentialEvaluator);
    let state = game.init();
    player.get_move(&game, &state).unwrap();
    Player::<MnkGame>::states_explored(&player)
}

fn first_move_alpha_beta(game: MnkGame, depth: i32) -> usize {
    let mut player = AlphaBetaPlayer::new(Role::Max, depth).with_evaluator(LinePotentialEvaluator);
    let state = game.init();
    player.get_move(&game, &state).unwrap();
    Player::<MnkGame>::states_explored(&player)
}
