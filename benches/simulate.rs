//! Criterion benchmarks for move simulation.
//!
//! Run with:
//!     cargo bench --bench simulate

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tarock::{
    Card, Coord, Direction, DirectionSet, FixedTieBreaker, GameEngine, GameState, MoveSimulator,
    PlayerId, PlayerPair,
};

fn hands() -> PlayerPair<Vec<Card>> {
    let hand = |prefix: &str| {
        (0..5)
            .map(|i| {
                let overpower = if i % 2 == 0 {
                    DirectionSet::empty().with(Direction::ALL[i % 4])
                } else {
                    DirectionSet::empty()
                };
                Card::new(format!("{prefix}{i}"), i as u32 + 1, 5 - i as u32, overpower)
            })
            .collect()
    };
    PlayerPair::new(hand("a"), hand("b"))
}

/// States after 0, 3 and 6 placements.
fn fixtures() -> Vec<(usize, GameState)> {
    [0, 3, 6]
        .into_iter()
        .map(|placed| {
            let mut engine =
                GameEngine::new(hands(), PlayerId::FIRST, FixedTieBreaker(PlayerId::FIRST))
                    .expect("fixture hands fill the board");
            for _ in 0..placed {
                let mv = engine.state().legal_moves().remove(0);
                engine.play(&mv).expect("fixture move is legal");
            }
            (placed, engine.into_state())
        })
        .collect()
}

fn bench_simulate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_all");

    for (placed, state) in fixtures() {
        group.bench_with_input(BenchmarkId::new("placed", placed), &state, |b, state| {
            let mut sim = MoveSimulator::seeded(1);
            b.iter(|| sim.simulate_all(black_box(state)).expect("legal moves simulate"));
        });
    }

    group.finish();
}

fn bench_simulate_one(c: &mut Criterion) {
    let state = GameState::new(hands(), PlayerId::FIRST);
    let card = state.hand(PlayerId::FIRST)[0].clone();
    let mut sim = MoveSimulator::seeded(1);

    c.bench_function("simulate_center", |b| {
        b.iter(|| sim.simulate(Coord::new(1, 1), &card, black_box(&state)))
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_clone");

    for (placed, state) in fixtures() {
        group.bench_with_input(BenchmarkId::new("placed", placed), &state, |b, state| {
            b.iter(|| state.clone());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulate_all, bench_simulate_one, bench_state_clone);
criterion_main!(benches);
