//! QPSK constellation (2 bits per symbol)
//!
//! Gray-coded mapping:
//! Symbol 0 → 45°  (I=+1, Q=+1) / √2
//! Symbol 1 → 135° (I=-1, Q=+1) / √2
//! Symbol 2 → 315° (I=+1, Q=-1) / √2
//! Symbol 3 → 225° (I=-1, Q=-1) / √2

use crate::traits::phase_error_to;
use crate::traits::{Constellation, Decision};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Quadrature Phase Shift Keying constellation (Gray coded)
#[derive(Debug, Clone, Copy, Default)]
pub struct Qpsk;

impl Constellation for Qpsk {
    fn order(&self) -> usize {
        4
    }

    fn point(&self, symbol: u8) -> Complex64 {
        let i = if (symbol & 0x02) == 0 { FRAC_1_SQRT_2 } else { -FRAC_1_SQRT_2 };
        let q = if (symbol & 0x01) == 0 { FRAC_1_SQRT_2 } else { -FRAC_1_SQRT_2 };
        Complex64::new(i, q)
    }

    fn decide(&self, sample: Complex64) -> Decision {
        let mut symbol = 0u8;
        if sample.re < 0.0 {
            symbol |= 0x02;
        }
        if sample.im < 0.0 {
            symbol |= 0x01;
        }
        Decision {
            symbol,
            phase_error: phase_error_to(sample, self.point(symbol)),
        }
    }
}
