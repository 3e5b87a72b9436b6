// ============================================================================
// Engine Configuration
// Dispatch heuristics for routing between scalar and vector engines
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Books shorter than this go to the scalar engine by default: batch setup
/// and horizontal reductions only amortize on longer scans.
pub const DEFAULT_MIN_VECTOR_LEN: usize = 64;

/// Configuration for the impact calculator's engine selection.
///
/// These are performance heuristics, not correctness boundaries — both
/// engines are always substitutable for each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Book length below which the scalar engine is used directly
    pub min_vector_len: usize,
    /// Route everything to the scalar engine (for comparison runs)
    pub force_scalar: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_vector_len: DEFAULT_MIN_VECTOR_LEN,
            force_scalar: false,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the minimum book length for vector dispatch.
    pub fn with_min_vector_len(mut self, len: usize) -> Self {
        self.min_vector_len = len;
        self
    }

    /// Builder method: force scalar execution regardless of book length.
    pub fn with_force_scalar(mut self, force: bool) -> Self {
        self.force_scalar = force;
        self
    }
}
