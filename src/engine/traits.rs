// ============================================================================
// Impact Engine Trait
// Abstract interface for impact price computation strategies
// ============================================================================

use crate::domain::{BookView, ImpactOutcome};

/// Trait for impact price computation over a read-only level sequence.
///
/// Implementations sweep book levels in priority order and return the
/// volume-weighted average price required to fill a notional target, or an
/// insufficient-depth signal. Scalar and vector implementations are
/// substitutable: for any valid input they must agree on classification and
/// within a small relative tolerance on the numeric results.
///
/// # Thread Safety
/// All implementations must be `Send + Sync`. The computation is pure — no
/// shared mutable state, no I/O — so concurrent invocations on independent
/// books need no locking.
///
/// # Preconditions
/// Inputs are validated by the dispatcher before an engine runs: every
/// price and volume is finite and non-negative, and the notional is finite
/// and non-negative. Engines assume this and do not re-check.
pub trait ImpactEngine: Send + Sync {
    /// Compute the impact price of filling `notional` against `book`.
    ///
    /// Levels are consumed strictly in array order. Returns
    /// `ImpactOutcome::InsufficientDepth` when the book's total notional
    /// capacity is below the target.
    fn impact_price(&self, book: &BookView<'_>, notional: f64) -> ImpactOutcome;

    /// Get the name of this implementation.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;

    /// Number of levels processed per data-parallel step (1 for scalar).
    fn lanes(&self) -> usize;
}
