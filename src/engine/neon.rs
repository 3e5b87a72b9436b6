// ============================================================================
// ARM NEON Implementation
// SIMD acceleration using NEON instructions (128-bit, 2x f64)
// ============================================================================

#![cfg(target_arch = "aarch64")]

use super::scalar::{finish_reduced, preflight, sweep, FillAccumulator};
use super::traits::ImpactEngine;
use crate::domain::{BookView, ImpactOutcome};

/// Levels per batch: two f64 lanes in a 128-bit register.
pub const NEON_LANES: usize = 2;

/// ARM NEON implementation of impact pricing.
///
/// Processes two (price, volume) rows per iteration using the structured
/// load `vld2q_f64`, which deinterleaves prices and volumes directly.
/// NEON is always available on aarch64 (ARMv8-A baseline).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonEngine;

impl NeonEngine {
    /// Create a new NEON engine.
    pub fn new() -> Self {
        Self
    }
}

impl ImpactEngine for NeonEngine {
    fn impact_price(&self, book: &BookView<'_>, notional: f64) -> ImpactOutcome {
        if let Some(outcome) = preflight(book, notional) {
            return outcome;
        }

        let mut acc = FillAccumulator::new();
        // NEON is always available on aarch64
        let reached = unsafe { neon_sweep(book.rows(), notional, &mut acc) };
        finish_reduced(acc, reached, notional)
    }

    fn name(&self) -> &'static str {
        "NEON"
    }

    fn lanes(&self) -> usize {
        NEON_LANES
    }
}

/// NEON-accelerated sweep toward `target` notional.
///
/// # Safety
/// This function uses NEON intrinsics which are always available on aarch64.
#[inline]
unsafe fn neon_sweep(rows: &[[f64; 2]], target: f64, acc: &mut FillAccumulator) -> bool {
    use std::arch::aarch64::*;

    let batches = rows.chunks_exact(NEON_LANES);
    let remainder = batches.remainder();
    let zero = vdupq_n_f64(0.0);

    for batch in batches {
        // Structured load deinterleaves: .0 = prices, .1 = volumes
        let pv = vld2q_f64(batch.as_ptr() as *const f64);
        let prices = pv.0;
        let volumes = pv.1;

        let notionals = vmulq_f64(prices, volumes);
        let batch_notional = vaddvq_f64(notionals);

        if acc.notional + batch_notional < target {
            acc.notional += batch_notional;
            acc.volume += vaddvq_f64(volumes);

            let nonzero = vcgtq_f64(volumes, zero);
            if vgetq_lane_u64::<0>(nonzero) != 0 {
                acc.levels += 1;
            }
            if vgetq_lane_u64::<1>(nonzero) != 0 {
                acc.levels += 1;
            }
            continue;
        }

        // Crossing batch: per-lane order is execution priority, resolve
        // sequentially with the shared kernel.
        if sweep(batch, target, acc) {
            return true;
        }
        // Reduction rounding left the total just short; keep scanning.
    }

    sweep(remainder, target, acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scalar::ScalarEngine;

    #[test]
    fn test_neon_batch_boundary_crossing() {
        let engine = NeonEngine::new();
        let rows = [[10.0, 5.0], [11.0, 5.0], [12.0, 5.0], [13.0, 5.0]];
        let view = BookView::new(&rows);

        let outcome = engine.impact_price(&view, 103.0);
        let impact = outcome.filled().expect("should fill");

        let expected_volume = 5.0 + 53.0 / 11.0;
        let expected_price = 103.0 / expected_volume;
        assert!((impact.impact_price - expected_price).abs() < 1e-9 * expected_price);
        assert_eq!(impact.levels_consumed, 2);
    }

    #[test]
    fn test_neon_insufficient_depth() {
        let engine = NeonEngine::new();
        let rows = [[10.0, 1.0], [11.0, 1.0], [12.0, 1.0]];
        let view = BookView::new(&rows);

        let outcome = engine.impact_price(&view, view.total_notional() + 1.0);
        assert!(!outcome.is_filled());
    }

    #[test]
    fn test_neon_odd_count() {
        let engine = NeonEngine::new();
        let scalar = ScalarEngine::new();
        let rows = [[10.0, 5.0], [11.0, 5.0], [12.0, 5.0]]; // 3 rows (odd)
        let view = BookView::new(&rows);

        let vector = engine.impact_price(&view, 140.0);
        let reference = scalar.impact_price(&view, 140.0);
        assert_eq!(vector.is_filled(), reference.is_filled());
    }

    #[test]
    fn test_neon_various_sizes_match_scalar() {
        let neon = NeonEngine::new();
        let scalar = ScalarEngine::new();

        for size in [1usize, 2, 3, 5, 7, 10, 15, 64, 100] {
            let rows: Vec<[f64; 2]> = (0..size)
                .map(|i| [100.0 + i as f64, 1.0 + (i % 3) as f64])
                .collect();
            let view = BookView::new(&rows);

            for fraction in [0.0, 0.1, 0.5, 0.9, 1.0] {
                let target = view.total_notional() * fraction;
                let vector = neon.impact_price(&view, target);
                let reference = scalar.impact_price(&view, target);

                match (vector, reference) {
                    (ImpactOutcome::Filled(v), ImpactOutcome::Filled(s)) => {
                        assert!(
                            (v.impact_price - s.impact_price).abs()
                                <= 1e-9 * s.impact_price.abs().max(1.0),
                            "price mismatch for size {size} fraction {fraction}: \
                             NEON={}, Scalar={}",
                            v.impact_price,
                            s.impact_price
                        );
                        assert_eq!(v.levels_consumed, s.levels_consumed);
                    },
                    (v, s) => panic!(
                        "classification mismatch for size {size} fraction {fraction}: \
                         NEON={v:?}, Scalar={s:?}"
                    ),
                }
            }
        }
    }

    #[test]
    fn test_neon_exact_capacity_classification() {
        let neon = NeonEngine::new();
        let scalar = ScalarEngine::new();

        // Fractional values make level notionals non-representable, so the
        // batch reductions round differently from the sequential sum. At
        // target == total capacity the classification must not flip.
        for size in [2usize, 5, 8, 17, 33, 64, 100, 257] {
            let rows: Vec<[f64; 2]> = (0..size)
                .map(|i| [100.1 + i as f64 * 0.3, 0.7 + (i % 5) as f64 * 1.1])
                .collect();
            let view = BookView::new(&rows);
            let target = view.total_notional();

            let reference = scalar.impact_price(&view, target);
            let s = reference
                .filled()
                .expect("sequential sweep fills exact capacity");

            let vector = neon.impact_price(&view, target);
            let v = vector
                .filled()
                .unwrap_or_else(|| panic!("size {size}: NEON must fill exact capacity"));

            assert!((v.filled_volume - s.filled_volume).abs() <= 1e-9 * s.filled_volume);
            assert!((v.impact_price - s.impact_price).abs() <= 1e-9 * s.impact_price);
            assert_eq!(v.levels_consumed, s.levels_consumed);
        }
    }

    #[test]
    fn test_neon_empty_book() {
        let engine = NeonEngine::new();
        let view = BookView::new(&[]);
        assert!(!engine.impact_price(&view, 100.0).is_filled());
    }

    #[test]
    fn test_neon_name_and_lanes() {
        let engine = NeonEngine::new();
        assert_eq!(engine.name(), "NEON");
        assert_eq!(engine.lanes(), 2);
    }
}
