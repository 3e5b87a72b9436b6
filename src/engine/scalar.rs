// ============================================================================
// Scalar Impact Engine
// Sequential reference implementation; the oracle for correctness
// ============================================================================

use super::traits::ImpactEngine;
use crate::domain::{BookView, DepthShortfall, Impact, ImpactOutcome};

/// Running fill state for a sweep.
///
/// The vector engines seed the same accumulator into the scalar kernel when
/// resolving a crossing batch, so both strategies share one definition of
/// "how far the fill has progressed".
#[derive(Debug, Clone, Copy)]
pub(crate) struct FillAccumulator {
    /// Cash value consumed so far
    pub notional: f64,
    /// Volume consumed so far
    pub volume: f64,
    /// Levels that contributed volume
    pub levels: usize,
}

impl FillAccumulator {
    pub(crate) const fn new() -> Self {
        Self {
            notional: 0.0,
            volume: 0.0,
            levels: 0,
        }
    }
}

/// Sequentially consume `rows` until `target` notional is reached.
///
/// A level is fully consumed while the running notional stays strictly
/// below the target; the crossing level is consumed fractionally with
/// `(target - filled) / price` and the sweep stops. Zero-volume levels are
/// no-ops. Returns `true` when the target was reached within these rows.
///
/// The crossing division is safe by construction: reaching the crossing
/// branch with a positive remaining notional requires a level with
/// `price * volume > 0`, hence a positive price.
pub(crate) fn sweep(rows: &[[f64; 2]], target: f64, acc: &mut FillAccumulator) -> bool {
    for row in rows {
        let price = row[0];
        let volume = row[1];
        let level_notional = price * volume;

        if acc.notional + level_notional < target {
            acc.notional += level_notional;
            acc.volume += volume;
            if volume > 0.0 {
                acc.levels += 1;
            }
            continue;
        }

        // Crossing level: take only the volume needed to reach the target.
        let remaining = target - acc.notional;
        acc.volume += remaining / price;
        acc.notional = target;
        acc.levels += 1;
        return true;
    }
    false
}

/// Handle the degenerate inputs both engines treat identically.
///
/// Empty books signal insufficient depth before anything else; a zero
/// notional is a well-defined fill at the first level's price with zero
/// consumed volume, keeping the contract total over valid inputs.
pub(crate) fn preflight(book: &BookView<'_>, target: f64) -> Option<ImpactOutcome> {
    if book.is_empty() {
        return Some(ImpactOutcome::InsufficientDepth(DepthShortfall::empty()));
    }
    if target == 0.0 {
        return Some(ImpactOutcome::Filled(Impact {
            impact_price: book.price(0),
            filled_volume: 0.0,
            filled_notional: 0.0,
            levels_consumed: 0,
        }));
    }
    None
}

/// Relative tolerance between the sequential and batch-reduced running sums.
pub(crate) const REDUCTION_TOLERANCE: f64 = 1e-9;

/// Turn a finished vector sweep into the outcome it reports.
///
/// The vector engines accumulate `acc.notional` from per-batch horizontal
/// reductions, which reorder additions relative to the sequential kernel.
/// At a target equal to total book capacity that reordering can leave the
/// running total a few ulps short even though the sequential sweep reaches
/// the target exactly. A terminal shortfall within the relative tolerance
/// of the target is therefore a full-depth fill, never insufficient depth:
/// the gap is reduction rounding, not missing liquidity.
pub(crate) fn finish_reduced(
    mut acc: FillAccumulator,
    reached: bool,
    target: f64,
) -> ImpactOutcome {
    if !reached && target - acc.notional <= target * REDUCTION_TOLERANCE {
        acc.notional = target;
        return finish(acc, true);
    }
    finish(acc, reached)
}

/// Turn a finished sweep into the outcome both engines report.
pub(crate) fn finish(acc: FillAccumulator, reached: bool) -> ImpactOutcome {
    if reached {
        ImpactOutcome::Filled(Impact {
            impact_price: acc.notional / acc.volume,
            filled_volume: acc.volume,
            filled_notional: acc.notional,
            levels_consumed: acc.levels,
        })
    } else {
        let best_effort_price = if acc.volume > 0.0 {
            Some(acc.notional / acc.volume)
        } else {
            None
        };
        ImpactOutcome::InsufficientDepth(DepthShortfall {
            available_notional: acc.notional,
            available_volume: acc.volume,
            best_effort_price,
        })
    }
}

/// Scalar implementation of impact pricing.
///
/// Walks levels one at a time in execution priority order. This is the
/// fallback on every platform and the reference the vector engines are
/// checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarEngine;

impl ScalarEngine {
    /// Create a new scalar engine.
    pub fn new() -> Self {
        Self
    }
}

impl ImpactEngine for ScalarEngine {
    fn impact_price(&self, book: &BookView<'_>, notional: f64) -> ImpactOutcome {
        if let Some(outcome) = preflight(book, notional) {
            return outcome;
        }

        let mut acc = FillAccumulator::new();
        let reached = sweep(book.rows(), notional, &mut acc);
        finish(acc, reached)
    }

    fn name(&self) -> &'static str {
        "Scalar"
    }

    fn lanes(&self) -> usize {
        1
    }
}
