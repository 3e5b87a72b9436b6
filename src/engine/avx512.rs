// ============================================================================
// x86_64 AVX-512 Implementation
// SIMD acceleration using AVX-512F instructions (512-bit, 8x f64)
// ============================================================================

#![cfg(all(target_arch = "x86_64", feature = "avx512"))]

use super::scalar::{finish_reduced, preflight, sweep, FillAccumulator};
use super::traits::ImpactEngine;
use crate::domain::{BookView, ImpactOutcome};

/// Levels per batch: eight f64 lanes in a 512-bit register.
pub const AVX512_LANES: usize = 8;

/// AVX-512 implementation of impact pricing.
///
/// Processes eight (price, volume) rows per iteration. Same two-phase
/// structure as the AVX2 engine with wider batches; deinterleaving uses
/// `permutex2var` with even/odd index vectors.
/// Requires runtime detection of AVX-512F support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx512Engine;

impl Avx512Engine {
    /// Create a new AVX-512 engine.
    ///
    /// # Panics
    /// Panics if AVX-512F is not available on this CPU.
    /// Use `is_available()` to check before creating.
    pub fn new() -> Self {
        assert!(
            Self::is_available(),
            "AVX-512F is not available on this CPU"
        );
        Self
    }

    /// Check if AVX-512F is available on this CPU.
    #[inline]
    pub fn is_available() -> bool {
        is_x86_feature_detected!("avx512f")
    }
}

impl ImpactEngine for Avx512Engine {
    fn impact_price(&self, book: &BookView<'_>, notional: f64) -> ImpactOutcome {
        if let Some(outcome) = preflight(book, notional) {
            return outcome;
        }

        let mut acc = FillAccumulator::new();
        // Safety: We checked AVX-512F availability in new()
        let reached = unsafe { avx512_sweep(book.rows(), notional, &mut acc) };
        finish_reduced(acc, reached, notional)
    }

    fn name(&self) -> &'static str {
        "AVX-512"
    }

    fn lanes(&self) -> usize {
        AVX512_LANES
    }
}

/// AVX-512-accelerated sweep toward `target` notional.
///
/// # Safety
/// Caller must ensure AVX-512F is available.
#[target_feature(enable = "avx512f")]
unsafe fn avx512_sweep(rows: &[[f64; 2]], target: f64, acc: &mut FillAccumulator) -> bool {
    use std::arch::x86_64::*;

    let batches = rows.chunks_exact(AVX512_LANES);
    let remainder = batches.remainder();

    // Even indices pick prices, odd indices pick volumes across the two
    // 512-bit row loads.
    let idx_prices = _mm512_setr_epi64(0, 2, 4, 6, 8, 10, 12, 14);
    let idx_volumes = _mm512_setr_epi64(1, 3, 5, 7, 9, 11, 13, 15);
    let zero = _mm512_setzero_pd();

    for batch in batches {
        let ptr = batch.as_ptr() as *const f64;
        let lo = _mm512_loadu_pd(ptr); // rows 0..4
        let hi = _mm512_loadu_pd(ptr.add(8)); // rows 4..8

        let prices = _mm512_permutex2var_pd(lo, idx_prices, hi);
        let volumes = _mm512_permutex2var_pd(lo, idx_volumes, hi);

        let notionals = _mm512_mul_pd(prices, volumes);
        let batch_notional = _mm512_reduce_add_pd(notionals);

        if acc.notional + batch_notional < target {
            acc.notional += batch_notional;
            acc.volume += _mm512_reduce_add_pd(volumes);

            let nonzero = _mm512_cmp_pd_mask::<_CMP_GT_OQ>(volumes, zero);
            acc.levels += nonzero.count_ones() as usize;
            continue;
        }

        // Crossing batch: resolve in execution priority order.
        if sweep(batch, target, acc) {
            return true;
        }
        // Reduction rounding left the total just short; keep scanning.
    }

    sweep(remainder, target, acc)
}
