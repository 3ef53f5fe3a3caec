use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use twenty48::policy::Greedy;
use twenty48::{Direction, Game, GameConfig};

/// Deterministic boards at a variety of densities.
fn corpus() -> Vec<Game> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
    let mut games = vec![game.clone()];
    let seq = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
    for i in 0..40 {
        game.apply_move(seq[i % seq.len()], &mut rng);
        games.push(game.clone());
    }
    games
}

fn bench_collapse(c: &mut Criterion) {
    for direction in Direction::ALL {
        let games = corpus();
        c.bench_function(&format!("collapse/{direction:?}"), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for game in &games {
                    acc = acc.wrapping_add(game.preview(direction).score_delta);
                }
                black_box(acc)
            })
        });
    }
}

fn bench_apply_and_spawn(c: &mut Criterion) {
    c.bench_function("game/spawn_tile", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(7);
                (Game::new(GameConfig::default(), &mut rng).unwrap(), rng)
            },
            |(mut game, mut rng)| {
                for _ in 0..15 {
                    game.spawn_tile(&mut rng);
                }
                black_box(game.grid().count_empty())
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/apply_move_left", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(9);
                (Game::new(GameConfig::default(), &mut rng).unwrap(), rng)
            },
            |(mut game, mut rng)| {
                for _ in 0..64 {
                    game.apply_move(Direction::Left, &mut rng);
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_whole_game(c: &mut Criterion) {
    c.bench_function("game/greedy_to_completion", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(11),
            |mut rng| {
                let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
                while let Some(direction) = Greedy.next_move(&game) {
                    game.apply_move(direction, &mut rng);
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(engine_ops, bench_collapse, bench_apply_and_spawn, bench_whole_game);
criterion_main!(engine_ops);
