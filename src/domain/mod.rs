// ============================================================================
// Domain Models Module
// Contains the order book view and impact result value objects
// ============================================================================

pub mod book;
pub mod config;
pub mod errors;
pub mod impact;

pub use book::{BookView, Level};
pub use config::{EngineConfig, DEFAULT_MIN_VECTOR_LEN};
pub use errors::ImpactError;
pub use impact::{DepthShortfall, Impact, ImpactOutcome};
