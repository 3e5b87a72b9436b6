// ============================================================================
// Market Impact Library
// SIMD-accelerated impact pricing against limit order book snapshots
// ============================================================================

//! # Market Impact
//!
//! Computes the **market impact price** of executing a large order against
//! a static snapshot of limit order book levels: the volume-weighted
//! average price required to fill a target notional by sweeping successive
//! price levels.
//!
//! ## Features
//!
//! - **Two substitutable engines**: a scalar reference sweep and a
//!   vectorized sweep (AVX2 on x86_64, NEON on aarch64, AVX-512 behind the
//!   `avx512` feature) that agree within 1e-9 relative tolerance
//! - **Runtime CPU detection** with automatic scalar fallback
//! - **Two-phase vector algorithm**: whole batches are consumed from
//!   horizontal reductions until the crossing batch, which is resolved in
//!   strict execution priority order by the scalar kernel
//! - **Zero-copy input**: engines borrow the caller's contiguous
//!   `(price, volume)` rows and allocate nothing
//! - **Pure computation**: no shared state, no I/O, trivially safe to call
//!   concurrently on independent books
//!
//! ## Example
//!
//! ```rust
//! use market_impact::prelude::*;
//!
//! // Levels sorted by execution priority (ascending price vs. asks)
//! let rows = [[10.0, 5.0], [11.0, 5.0], [12.0, 5.0], [13.0, 5.0]];
//! let book = BookView::new(&rows);
//!
//! let calculator = ImpactCalculator::new();
//! match calculator.impact_price(&book, 103.0).unwrap() {
//!     ImpactOutcome::Filled(impact) => {
//!         println!("impact price: {:.4}", impact.impact_price);
//!         println!("volume consumed: {:.4}", impact.filled_volume);
//!     }
//!     ImpactOutcome::InsufficientDepth(shortfall) => {
//!         println!("book too thin, available: {}", shortfall.available_notional);
//!     }
//! }
//! ```

pub mod domain;
pub mod engine;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BookView, DepthShortfall, EngineConfig, Impact, ImpactError, ImpactOutcome, Level,
    };
    pub use crate::engine::{
        create_scalar_engine, create_vector_engine, Architecture, CpuCapabilities,
        ImpactCalculator, ImpactEngine, ScalarEngine, SimdLevel,
    };
}
