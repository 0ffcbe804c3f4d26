//! 8-PSK constellation (3 bits per symbol)
//!
//! Natural mapping (not Gray coded):
//! Symbol 0 → 0°
//! Symbol 1 → 45°
//! Symbol 2 → 90°
//! ...
//! Symbol 7 → 315°

use crate::traits::phase_error_to;
use crate::traits::{Constellation, Decision};
use num_complex::Complex64;
use std::f64::consts::PI;

/// 8-Phase Shift Keying constellation
#[derive(Debug, Clone, Copy, Default)]
pub struct Psk8;

impl Constellation for Psk8 {
    fn order(&self) -> usize {
        8
    }

    fn point(&self, symbol: u8) -> Complex64 {
        let phase = (symbol & 0x07) as f64 * PI / 4.0;
        Complex64::from_polar(1.0, phase)
    }

    fn decide(&self, sample: Complex64) -> Decision {
        let angle = sample.im.atan2(sample.re);
        let angle_pos = if angle < 0.0 { angle + 2.0 * PI } else { angle };
        // Half-sector offset rounds to the nearest point
        let symbol = (((angle_pos + PI / 8.0) / (PI / 4.0)).floor() as u8) & 0x07;
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
    fn test_psk8_roundtrip() {
        for sym in 0..8u8 {
            let decision = Psk8.decide(Psk8.point(sym));
            assert_eq!(decision.symbol, sym, "Symbol {} roundtrip failed", sym);
            assert!(decision.phase_error.abs() < 1e-12);
        }
    }

    #[test]
    fn test_psk8_unit_power() {
        for sym in 0..8u8 {
            let power = Psk8.point(sym).norm_sqr();
            assert!((power - 1.0).abs() < 1e-10, "Symbol {} power: {}", sym, power);
        }
    }

    #[test]
    fn test_psk8_phases() {
        // Symbol 2 at 90°, symbol 4 at 180°
        let p2 = Psk8.point(2);
        assert!(p2.re.abs() < 1e-10 && (p2.im - 1.0).abs() < 1e-10);
        let p4 = Psk8.point(4);
        assert!((p4.re + 1.0).abs() < 1e-10 && p4.im.abs() < 1e-10);
    }

    #[test]
    fn test_psk8_sector_boundaries() {
        // Just inside each half-sector still decides the center symbol
        for sym in 0..8u8 {
            for offset in [-PI / 8.0 + 1e-6, PI / 8.0 - 1e-6] {
                let sample = Psk8.point(sym) * Complex64::from_polar(1.0, offset);
                assert_eq!(Psk8.decide(sample).symbol, sym);
            }
        }
    }

    #[test]
    fn test_psk8_order() {
        assert_eq!(Psk8.order(), 8);
        assert_eq!(Psk8.bits_per_symbol(), 3);
    }
}
