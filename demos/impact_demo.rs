// ============================================================================
// Impact Pricing Walkthrough
// ============================================================================

use market_impact::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Market Impact Example ===\n");

    let caps = CpuCapabilities::detect();
    println!("{caps}");

    let calculator = ImpactCalculator::new();
    println!(
        "Vector engine: {} ({} lanes at the detected level)\n",
        calculator.vector_engine_name(),
        SimdLevel::detect().lanes()
    );

    // Ask-side snapshot, sorted ascending by price.
    let rows = [
        [50_000.0, 0.5],
        [50_010.0, 1.2],
        [50_025.0, 0.8],
        [50_050.0, 2.0],
        [50_100.0, 1.5],
        [50_200.0, 3.0],
    ];
    let book = BookView::new(&rows);

    println!("Order book ({} levels):", book.len());
    for level in book.iter() {
        println!("  {:>8.4} @ {:.2}", level.volume, level.price);
    }
    println!(
        "Total capacity: {:.2} notional / {:.4} volume\n",
        book.total_notional(),
        book.total_volume()
    );

    println!("=== Sweeping Notional Targets ===");
    for notional in [10_000.0, 100_000.0, 250_000.0, 1_000_000.0] {
        match calculator.impact_price(&book, notional) {
            Ok(ImpactOutcome::Filled(impact)) => {
                println!(
                    "notional {:>10.0}: impact price {:.4}, volume {:.4}, {} levels",
                    notional, impact.impact_price, impact.filled_volume, impact.levels_consumed
                );
            },
            Ok(ImpactOutcome::InsufficientDepth(shortfall)) => {
                println!(
                    "notional {:>10.0}: insufficient depth (available {:.2}, best effort {:?})",
                    notional, shortfall.available_notional, shortfall.best_effort_price
                );
            },
            Err(err) => println!("notional {notional:>10.0}: rejected ({err})"),
        }
    }

    println!("\n=== Validation ===");
    match calculator.impact_price(&book, -5.0) {
        Err(err) => println!("negative notional rejected: {err}"),
        Ok(_) => unreachable!("dispatcher must reject negative notionals"),
    }
}
