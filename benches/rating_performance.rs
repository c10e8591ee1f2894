//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use podium::rating::{RatingCalculator, Standing};
use podium::types::ContestResult;
use podium::{AllPairsEloCalculator, RatingLedger};

fn standings(count: usize) -> Vec<Standing> {
    (0..count)
        .map(|i| {
            Standing::new(
                format!("player{}", i),
                1000 + (i as i32 * 17) % 400,
                i as i32 + 1,
            )
        })
        .collect()
}

fn bench_rating_calculations(c: &mut Criterion) {
    let calculator = AllPairsEloCalculator::default();

    let four = standings(4);
    c.bench_function("pairwise_deltas_4_players", |b| {
        b.iter(|| black_box(calculator.calculate_deltas(black_box(&four))))
    });

    let sixteen = standings(16);
    c.bench_function("pairwise_deltas_16_players", |b| {
        b.iter(|| black_box(calculator.calculate_deltas(black_box(&sixteen))))
    });
}

fn bench_record_contest(c: &mut Criterion) {
    c.bench_function("record_contest_8_players", |b| {
        b.iter(|| {
            let mut ledger = RatingLedger::new();
            for i in 0..8 {
                ledger.add_player(&format!("player{}", i)).unwrap();
            }

            let submission: Vec<ContestResult> = (0..8)
                .map(|i| ContestResult::new(format!("player{}", i), i + 1))
                .collect();

            black_box(ledger.record_contest(submission))
        })
    });
}

criterion_group!(benches, bench_rating_calculations, bench_record_contest);
criterion_main!(benches);
