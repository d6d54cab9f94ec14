use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use dead_position::dead_position::evaluator::{evaluate_fen, is_dead};
use dead_position::game_state::dead_state::DeadState;
use dead_position::utils::batch::{evaluate_batch, BatchConfig};
use dead_position::utils::fen_generator::state_to_fen;
use dead_position::utils::position_generator::{random_state, PositionGeneratorConfig};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_dead: bool,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "bare_kings",
        fen: "4k3/8/8/8/8/8/8/4K3 w - -",
        expected_dead: true,
    },
    BenchCase {
        name: "free_pawn",
        fen: "4k3/8/8/8/8/8/4P3/4K3 w - -",
        expected_dead: false,
    },
    BenchCase {
        name: "pawn_wall",
        fen: "k2b4/8/8/p1p1p1p1/P1P1P1P1/8/8/3BK3 w - -",
        expected_dead: true,
    },
    BenchCase {
        name: "corner_mate",
        fen: "k7/2b1bB2/8/p1p1p1p1/P1P1P1P1/8/8/4K3 w - -",
        expected_dead: false,
    },
];

const RANDOM_POSITIONS: usize = 1024;

fn random_states() -> Vec<DeadState> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let config = PositionGeneratorConfig::default();
    (0..RANDOM_POSITIONS)
        .map(|_| random_state(&mut rng, &config))
        .collect()
}

fn bench_known_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_fen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        // Correctness guard before benchmarking.
        assert_eq!(
            evaluate_fen(case.fen).dead,
            case.expected_dead,
            "verdict mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), case.fen, |b, fen| {
            b.iter(|| black_box(evaluate_fen(black_box(fen))))
        });
    }

    group.finish();
}

fn bench_random_states(c: &mut Criterion) {
    let states = random_states();
    let lines: Vec<String> = states.iter().map(state_to_fen).collect();

    let mut group = c.benchmark_group("random_positions");
    group.throughput(Throughput::Elements(RANDOM_POSITIONS as u64));
    group.sample_size(30);

    group.bench_function("is_dead", |b| {
        b.iter(|| {
            states
                .iter()
                .filter(|state| is_dead(black_box(state)))
                .count()
        })
    });

    for threads in [1usize, 4] {
        let config = BatchConfig {
            requested_threads: threads,
            ..BatchConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("batch", threads), &config, |b, config| {
            b.iter(|| black_box(evaluate_batch(black_box(&lines), config).summary))
        });
    }

    group.finish();
}

criterion_group!(dead_position_benches, bench_known_positions, bench_random_states);
criterion_main!(dead_position_benches);
