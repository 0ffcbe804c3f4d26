//! Error types for receiver construction and loop tuning

use thiserror::Error;

/// Errors reported by the carrier recovery loop
///
/// Construction errors are fatal (the receiver is never built); setter
/// errors are recoverable and leave the previous state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecoveryError {
    /// The receiver only works with one-dimensional constellations
    #[error("unsupported constellation dimensionality {0}, receiver requires 1")]
    UnsupportedDimensionality(usize),

    #[error("invalid loop bandwidth {0}, must be >= 0")]
    InvalidLoopBandwidth(f64),

    #[error("invalid damping factor {0}, must be in [0, 1]")]
    InvalidDamping(f64),

    #[error("invalid alpha {0}, must be in [0, 1]")]
    InvalidAlpha(f64),

    #[error("invalid beta {0}, must be in [0, 1]")]
    InvalidBeta(f64),
}
