//! BPSK constellation (1 bit per symbol)
//!
//! Symbol 0 → +1 (0°)
//! Symbol 1 → -1 (180°)

use crate::traits::phase_error_to;
use crate::traits::{Constellation, Decision};
use num_complex::Complex64;

/// Binary Phase Shift Keying constellation
#[derive(Debug, Clone, Copy, Default)]
pub struct Bpsk;

impl Constellation for Bpsk {
    fn order(&self) -> usize {
        2
    }

    fn point(&self, symbol: u8) -> Complex64 {
        match symbol & 0x01 {
            0 => Complex64::new(1.0, 0.0),
            _ => Complex64::new(-1.0, 0.0),
        }
    }

    fn decide(&self, sample: Complex64) -> Decision {
        let symbol = if sample.re >= 0.0 { 0 } else { 1 };
        Decision {
            symbol,
            phase_error: phase_error_to(sample, self.point(symbol)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpsk_roundtrip() {
        for sym in 0..2u8 {
            let decision = Bpsk.decide(Bpsk.point(sym));
            assert_eq!(decision.symbol, sym, "Symbol {} roundtrip failed", sym);
            assert!(decision.phase_error.abs() < 1e-12);
        }
    }

    #[test]
    fn test_bpsk_phase_error_sign() {
        // Sample leading symbol 0 by +0.2 rad → error -0.2
        let sample = Complex64::from_polar(1.0, 0.2);
        let decision = Bpsk.decide(sample);
        assert_eq!(decision.symbol, 0);
        assert!((decision.phase_error + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_bpsk_order() {
        assert_eq!(Bpsk.order(), 2);
        assert_eq!(Bpsk.bits_per_symbol(), 1);
        assert_eq!(Bpsk.dimensionality(), 1);
    }
}
