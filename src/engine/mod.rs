// ============================================================================
// Engine Module
// Impact price computation strategies and their dispatcher
//
// Supported architectures:
// - x86_64: AVX2 (256-bit, 4x f64), AVX-512 behind the `avx512` feature
// - aarch64: NEON (128-bit, 2x f64)
// - Other: Scalar fallback
// ============================================================================

pub mod detector;
pub mod dispatcher;
pub mod scalar;
pub mod traits;

#[cfg(target_arch = "x86_64")]
pub mod avx2;

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
pub mod avx512;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub use detector::{
    create_scalar_engine, create_vector_engine, Architecture, CpuCapabilities, SimdLevel,
};
pub use dispatcher::ImpactCalculator;
pub use scalar::ScalarEngine;
pub use traits::ImpactEngine;

#[cfg(target_arch = "x86_64")]
pub use avx2::Avx2Engine;

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
pub use avx512::Avx512Engine;

#[cfg(target_arch = "aarch64")]
pub use neon::NeonEngine;
