// ============================================================================
// x86_64 AVX2 Implementation
// SIMD acceleration using AVX2 instructions (256-bit, 4x f64)
// ============================================================================

#![cfg(target_arch = "x86_64")]

use super::scalar::{finish_reduced, preflight, sweep, FillAccumulator};
use super::traits::ImpactEngine;
use crate::domain::{BookView, ImpactOutcome};

/// Levels per batch: four f64 lanes in a 256-bit register.
pub const AVX2_LANES: usize = 4;

/// AVX2 implementation of impact pricing.
///
/// Processes four (price, volume) rows per iteration. Batches whose total
/// notional keeps the running fill strictly below the target are consumed
/// whole from two horizontal reductions; the batch containing the crossing
/// point is resolved by the scalar kernel, seeded with the accumulated
/// state, because per-lane order inside it is execution priority.
/// Requires runtime detection of AVX2 support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx2Engine;

impl Avx2Engine {
    /// Create a new AVX2 engine.
    ///
    /// # Panics
    /// Panics if AVX2 is not available on this CPU.
    /// Use `is_available()` to check before creating.
    pub fn new() -> Self {
        assert!(Self::is_available(), "AVX2 is not available on this CPU");
        Self
    }

    /// Check if AVX2 is available on this CPU.
    #[inline]
    pub fn is_available() -> bool {
        is_x86_feature_detected!("avx2")
    }
}

impl ImpactEngine for Avx2Engine {
    fn impact_price(&self, book: &BookView<'_>, notional: f64) -> ImpactOutcome {
        if let Some(outcome) = preflight(book, notional) {
            return outcome;
        }

        let mut acc = FillAccumulator::new();
        // Safety: We checked AVX2 availability in new()
        let reached = unsafe { avx2_sweep(book.rows(), notional, &mut acc) };
        finish_reduced(acc, reached, notional)
    }

    fn name(&self) -> &'static str {
        "AVX2"
    }

    fn lanes(&self) -> usize {
        AVX2_LANES
    }
}

/// AVX2-accelerated sweep toward `target` notional.
///
/// Rows are interleaved `[p, v]` pairs, so each batch is two 256-bit loads
/// deinterleaved with unpack into price and volume registers. Lane order
/// inside a register is scrambled by the unpack, which is fine: the bulk
/// phase only needs batch totals, and the crossing batch goes through the
/// in-order scalar kernel.
///
/// # Safety
/// Caller must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
unsafe fn avx2_sweep(rows: &[[f64; 2]], target: f64, acc: &mut FillAccumulator) -> bool {
    use std::arch::x86_64::*;

    let batches = rows.chunks_exact(AVX2_LANES);
    let remainder = batches.remainder();
    let zero = _mm256_setzero_pd();

    for batch in batches {
        let ptr = batch.as_ptr() as *const f64;
        let lo = _mm256_loadu_pd(ptr); // p0 v0 p1 v1
        let hi = _mm256_loadu_pd(ptr.add(4)); // p2 v2 p3 v3

        let prices = _mm256_unpacklo_pd(lo, hi); // p0 p2 p1 p3
        let volumes = _mm256_unpackhi_pd(lo, hi); // v0 v2 v1 v3

        let notionals = _mm256_mul_pd(prices, volumes);
        let batch_notional = hsum_pd(notionals);

        if acc.notional + batch_notional < target {
            // Whole batch is certainly consumed: no per-lane inspection.
            acc.notional += batch_notional;
            acc.volume += hsum_pd(volumes);

            let nonzero = _mm256_cmp_pd::<_CMP_GT_OQ>(volumes, zero);
            acc.levels += _mm256_movemask_pd(nonzero).count_ones() as usize;
            continue;
        }

        // The crossing point lies inside this batch; resolve it in
        // execution priority order with the scalar kernel.
        if sweep(batch, target, acc) {
            return true;
        }
        // Reduction rounding put the running total a hair short of the
        // target; the sequential pass advanced acc, keep scanning.
    }

    sweep(remainder, target, acc)
}

/// Pairwise tree reduction of all four lanes to a scalar sum.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn hsum_pd(v: std::arch::x86_64::__m256d) -> f64 {
    use std::arch::x86_64::*;

    let lo = _mm256_castpd256_pd128(v);
    let hi = _mm256_extractf128_pd::<1>(v);
    let pair = _mm_add_pd(lo, hi);
    let swapped = _mm_unpackhi_pd(pair, pair);
    _mm_cvtsd_f64(_mm_add_sd(pair, swapped))
}
