// ============================================================================
// Impact Engine Dispatcher
// Input validation and scalar/vector engine selection
// ============================================================================

use super::detector::{create_scalar_engine, create_vector_engine, CpuCapabilities};
use super::traits::ImpactEngine;
use crate::domain::{BookView, EngineConfig, ImpactError, ImpactOutcome};
use std::sync::Arc;

/// The entry point callers interact with.
///
/// Validates preconditions, then routes to the vector engine when the book
/// is long enough to amortize batch overhead and to the scalar engine
/// otherwise. The routing is a performance heuristic only — both engines
/// are always substitutable.
pub struct ImpactCalculator {
    vector: Arc<dyn ImpactEngine>,
    scalar: Arc<dyn ImpactEngine>,
    config: EngineConfig,
}

impl Default for ImpactCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImpactCalculator {
    /// Create a calculator with auto-detected engines and default routing.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a calculator with explicit routing configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let vector = create_vector_engine();
        tracing::debug!(
            capabilities = %CpuCapabilities::detect(),
            engine = vector.name(),
            lanes = vector.lanes(),
            min_vector_len = config.min_vector_len,
            "impact calculator initialized"
        );

        Self {
            vector,
            scalar: create_scalar_engine(),
            config,
        }
    }

    /// Compute the impact price of filling `notional` against `book`.
    ///
    /// Fails fast with [`ImpactError`] on non-finite or negative inputs;
    /// insufficient depth is reported as a defined outcome, not an error.
    pub fn impact_price(
        &self,
        book: &BookView<'_>,
        notional: f64,
    ) -> Result<ImpactOutcome, ImpactError> {
        validate(book, notional)?;

        let engine = self.select(book.len());
        tracing::trace!(engine = engine.name(), levels = book.len(), notional);
        Ok(engine.impact_price(book, notional))
    }

    /// Name of the engine that would handle a book of `len` levels.
    pub fn engine_for_len(&self, len: usize) -> &'static str {
        self.select(len).name()
    }

    /// Name of the detected vector engine.
    pub fn vector_engine_name(&self) -> &'static str {
        self.vector.name()
    }

    fn select(&self, len: usize) -> &dyn ImpactEngine {
        if self.config.force_scalar || len < self.config.min_vector_len {
            &*self.scalar
        } else {
            &*self.vector
        }
    }
}

/// Check the preconditions both engines assume.
fn validate(book: &BookView<'_>, notional: f64) -> Result<(), ImpactError> {
    if !notional.is_finite() || notional < 0.0 {
        return Err(ImpactError::InvalidNotional { value: notional });
    }

    for (index, row) in book.rows().iter().enumerate() {
        let price = row[0];
        let volume = row[1];
        if !price.is_finite() || price < 0.0 {
            return Err(ImpactError::InvalidPrice { index, value: price });
        }
        if !volume.is_finite() || volume < 0.0 {
            return Err(ImpactError::InvalidVolume {
                index,
                value: volume,
            });
        }
    }

    Ok(())
}
