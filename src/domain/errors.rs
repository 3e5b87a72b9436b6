// ============================================================================
// Impact Errors
// Error types for input validation ahead of the impact engines
// ============================================================================

use std::fmt;

/// Errors raised by the dispatcher before either engine runs.
///
/// Insufficient depth is deliberately not represented here: it is a defined,
/// non-fatal outcome (`ImpactOutcome::InsufficientDepth`), not an input
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpactError {
    /// Notional target is negative, NaN or infinite
    InvalidNotional {
        /// The rejected notional value
        value: f64,
    },
    /// A level price is negative, NaN or infinite
    InvalidPrice {
        /// Index of the offending level
        index: usize,
        /// The rejected price
        value: f64,
    },
    /// A level volume is negative, NaN or infinite
    InvalidVolume {
        /// Index of the offending level
        index: usize,
        /// The rejected volume
        value: f64,
    },
    /// Flat input slice cannot form (price, volume) rows
    MalformedBook {
        /// Length of the rejected slice
        len: usize,
    },
}

impl fmt::Display for ImpactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactError::InvalidNotional { value } => {
                write!(f, "invalid notional {value}: must be finite and non-negative")
            },
            ImpactError::InvalidPrice { index, value } => {
                write!(
                    f,
                    "invalid price {value} at level {index}: must be finite and non-negative"
                )
            },
            ImpactError::InvalidVolume { index, value } => {
                write!(
                    f,
                    "invalid volume {value} at level {index}: must be finite and non-negative"
                )
            },
            ImpactError::MalformedBook { len } => {
                write!(
                    f,
                    "malformed book: flat slice of length {len} does not split into (price, volume) rows"
                )
            },
        }
    }
}

impl std::error::Error for ImpactError {}
