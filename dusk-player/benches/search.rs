use criterion::*;
use dusk_othello::test_utils;
use dusk_othello::{Board, CellWeights};
use dusk_player::search::{select_move, SearchContext};
use dusk_player::CancelToken;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_opening(c: &mut Criterion) {
    let cancel = CancelToken::new();
    let weights = CellWeights::STANDARD;

    let mut group = c.benchmark_group("select_move/opening");
    group.sample_size(20);

    for depth in 3..=5 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let ctx = SearchContext::new(&cancel, &weights);
                select_move(black_box(Board::new()), depth, &ctx)
            })
        });
    }

    group.finish();
}

fn criterion_midgame(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let positions: Vec<Board> = (0..32)
        .map(|_| test_utils::random_playout(&mut rng, 20))
        .collect();
    let cancel = CancelToken::new();
    let weights = CellWeights::STANDARD;

    let mut group = c.benchmark_group("select_move/midgame");
    group.sample_size(10);

    for depth in 3..=5 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                positions
                    .iter()
                    .filter_map(|&board| {
                        let ctx = SearchContext::new(&cancel, &weights);
                        select_move(black_box(board), depth, &ctx)
                    })
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_opening, criterion_midgame);
criterion_main!(benches);
