//! Constellation trait - Symbol ↔ I/Q mapping and symbol decision
//!
//! Defines how symbol indices map to complex baseband points and how a
//! received point maps back to the nearest symbol. This trait knows
//! nothing about carrier tracking, framing, or coding.

use num_complex::Complex64;

/// Hard decision for one received sample
///
/// Produced fresh per sample, never retained across samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Nearest symbol index (0 to order-1)
    pub symbol: u8,
    /// Residual phase error between the sample and the decided point
    /// (radians, signed)
    pub phase_error: f64,
}

/// Symbol alphabet mapping trait
///
/// Implementations define the geometry of the constellation diagram.
/// Used by the modulator side (symbol → point) and by the receiver
/// (point → symbol index + phase error for the tracking loop).
pub trait Constellation: Send + Sync {
    /// Number of points in the constellation (2 for BPSK, 4 for QPSK, etc.)
    fn order(&self) -> usize;

    /// Samples per decision (1 for every memoryless constellation)
    fn dimensionality(&self) -> usize {
        1
    }

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        (self.order() as f64).log2() as usize
    }

    /// Map a symbol index to its constellation point
    fn point(&self, symbol: u8) -> Complex64;

    /// Decide the nearest symbol for a derotated sample
    ///
    /// The returned phase error is the angle from the decided point to the
    /// sample, negated, so that feeding it into the tracking loop rotates
    /// the estimate toward the point. Pure with respect to the receiver:
    /// no state visible to the loop is mutated.
    fn decide(&self, sample: Complex64) -> Decision;
}

/// Phase error between a sample and its decided point
///
/// `-arg(sample * conj(point))`: zero when the sample sits exactly on the
/// point, negative when the sample leads it.
#[inline]
pub(crate) fn phase_error_to(sample: Complex64, point: Complex64) -> f64 {
    -(sample * point.conj()).arg()
}
