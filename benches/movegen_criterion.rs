use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use othello_engine::game_state::board_state::BoardState;
use othello_engine::game_state::othello_types::Color;
use othello_engine::move_generation::directional_scan::DirectionalScanGenerator;
use othello_engine::move_generation::kogge_stone::KoggeStoneGenerator;
use othello_engine::move_generation::move_generator::MoveGenerator;
use othello_engine::utils::random_position::random_playout;

const POSITIONS: usize = 256;

fn sample_positions() -> Vec<(BoardState, Color)> {
    let mut rng = StdRng::seed_from_u64(0x0BF0_0BF0);
    (0..POSITIONS)
        .map(|i| {
            let game = random_playout(&mut rng, 4 + i % 52).expect("random playout should succeed");
            (game.board, game.side_to_move)
        })
        .collect()
}

fn count_moves<G: MoveGenerator>(generator: &G, positions: &[(BoardState, Color)]) -> usize {
    positions
        .iter()
        .map(|(board, color)| generator.legal_moves(board, *color).len())
        .sum()
}

fn bench_movegen(c: &mut Criterion) {
    let positions = sample_positions();

    // Correctness guard before benchmarking.
    for (board, color) in &positions {
        assert_eq!(
            DirectionalScanGenerator.legal_moves(board, *color),
            KoggeStoneGenerator.legal_moves(board, *color),
            "generators disagree"
        );
    }
    let expected = count_moves(&KoggeStoneGenerator, &positions);

    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(POSITIONS as u64));

    group.bench_with_input(
        BenchmarkId::from_parameter("directional_scan"),
        &positions,
        |b, positions| {
            b.iter(|| {
                let total = count_moves(&DirectionalScanGenerator, black_box(positions));
                assert_eq!(total, expected);
                black_box(total)
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::from_parameter("kogge_stone"),
        &positions,
        |b, positions| {
            b.iter(|| {
                let total = count_moves(&KoggeStoneGenerator, black_box(positions));
                assert_eq!(total, expected);
                black_box(total)
            });
        },
    );

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen);
criterion_main!(movegen_benches);
