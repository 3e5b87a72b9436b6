// ============================================================================
// Impact Result
// Outcome of sweeping a notional target against a book snapshot
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A completed fill: the volume-weighted average price required to execute
/// the requested notional against successive book levels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Impact {
    /// Volume-weighted average execution price
    pub impact_price: f64,
    /// Volume actually consumed, including the fractional crossing fill
    pub filled_volume: f64,
    /// Cash value consumed; equals the requested notional on a fill
    pub filled_notional: f64,
    /// Number of levels that contributed volume
    pub levels_consumed: usize,
}

/// The book cannot cover the requested notional.
///
/// Reports what was achievable over full depth so callers can size down
/// instead of retrying blind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthShortfall {
    /// Total cash value available across all levels
    pub available_notional: f64,
    /// Total volume available across all levels
    pub available_volume: f64,
    /// Best achievable average price over full depth, if any volume exists
    pub best_effort_price: Option<f64>,
}

impl DepthShortfall {
    /// Shortfall for an empty book.
    pub fn empty() -> Self {
        Self {
            available_notional: 0.0,
            available_volume: 0.0,
            best_effort_price: None,
        }
    }
}

/// Result of an impact price computation over valid inputs.
///
/// Insufficient depth is a defined outcome rather than an error: callers
/// must check for it explicitly instead of receiving a silently wrong
/// price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ImpactOutcome {
    /// The target notional was filled
    Filled(Impact),
    /// The book's total notional capacity is below the target
    InsufficientDepth(DepthShortfall),
}

impl ImpactOutcome {
    pub fn is_filled(&self) -> bool {
        matches!(self, ImpactOutcome::Filled(_))
    }

    pub fn filled(&self) -> Option<&Impact> {
        match self {
            ImpactOutcome::Filled(impact) => Some(impact),
            ImpactOutcome::InsufficientDepth(_) => None,
        }
    }

    /// Impact price on a fill, `None` on insufficient depth.
    pub fn price(&self) -> Option<f64> {
        self.filled().map(|impact| impact.impact_price)
    }
}
