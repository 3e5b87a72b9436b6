// ============================================================================
// Impact Pricing Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Engine Comparison - scalar vs vector sweep across book sizes
// 2. Worst Case - full-depth sweeps where no batch can be skipped early
// 3. Dispatcher - the validated end-to-end path callers actually use
//
// Architecture Notes:
// - x86_64: Uses AVX2 (256-bit, 4x f64 parallel)
// - aarch64: Uses NEON (128-bit, 2x f64 parallel)
// - Other: Scalar fallback
//
// Sizing Notes:
// - Book sizes sweep 100 to 1M levels with a 100k step in between. A 10M
//   case is deliberately left out: per-level throughput is already flat at
//   1M and the extra decade only adds wall-clock time to the suite.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use market_impact::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random book, sorted ascending by price.
fn generate_book(levels: usize) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut rows: Vec<[f64; 2]> = (0..levels)
        .map(|_| [rng.gen::<f64>() * 100.0, rng.gen::<f64>() * 100.0])
        .collect();
    rows.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap());
    rows
}

// ============================================================================
// Engine Comparison Benchmarks
// A fixed notional that crosses early in the book: the common case where
// the vector engine's whole-batch skipping pays off least, since the sweep
// terminates after a handful of levels.
// ============================================================================

fn benchmark_engine_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("impact_price_engines");
    let scalar = create_scalar_engine();
    let vector = create_vector_engine();

    for levels in [100usize, 1_000, 10_000, 100_000, 1_000_000].iter() {
        let rows = generate_book(*levels);
        let book = BookView::new(&rows);
        let notional = 50_000.0;

        group.bench_with_input(BenchmarkId::new("Scalar", levels), &book, |b, book| {
            b.iter(|| black_box(scalar.impact_price(book, black_box(notional))));
        });

        group.bench_with_input(
            BenchmarkId::new(vector.name(), levels),
            &book,
            |b, book| {
                b.iter(|| black_box(vector.impact_price(book, black_box(notional))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Worst Case Benchmarks
// Target near total capacity: every batch must be reduced and the crossing
// falls in the last one, so this measures sustained scan throughput.
// ============================================================================

fn benchmark_full_depth_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("impact_price_full_depth");
    let scalar = create_scalar_engine();
    let vector = create_vector_engine();

    for levels in [1_000usize, 100_000, 1_000_000].iter() {
        let rows = generate_book(*levels);
        let book = BookView::new(&rows);
        let notional = book.total_notional() * 0.999;

        group.bench_with_input(BenchmarkId::new("Scalar", levels), &book, |b, book| {
            b.iter(|| black_box(scalar.impact_price(book, black_box(notional))));
        });

        group.bench_with_input(
            BenchmarkId::new(vector.name(), levels),
            &book,
            |b, book| {
                b.iter(|| black_box(vector.impact_price(book, black_box(notional))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Dispatcher Benchmarks
// Includes input validation, the cost callers actually pay per invocation.
// ============================================================================

fn benchmark_dispatcher_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("impact_calculator");
    let calculator = ImpactCalculator::new();

    for levels in [100usize, 10_000, 1_000_000].iter() {
        let rows = generate_book(*levels);
        let book = BookView::new(&rows);

        group.bench_with_input(
            BenchmarkId::from_parameter(levels),
            &book,
            |b, book| {
                b.iter(|| black_box(calculator.impact_price(book, black_box(50_000.0))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_engine_comparison,
    benchmark_full_depth_sweep,
    benchmark_dispatcher_path,
);
criterion_main!(benches);
