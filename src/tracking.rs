//! Second-order carrier tracking loop
//!
//! Owns the phase and frequency estimates and the loop-filter gains.
//! The gains are derived from normalized loop bandwidth and damping
//! factor, and can be hand-tuned afterwards through direct overrides.
//!
//! Two distinct range-enforcement policies coexist and are both kept:
//! the explicit `set_frequency` setter wraps an out-of-range request to
//! the opposite bound (so a sweep never stalls at a rail), while the
//! per-sample update clips symmetrically to ±max_freq.

use crate::error::RecoveryError;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

const TWO_PI: f64 = 2.0 * PI;

/// Derive the proportional and integral gains for a near-critically
/// damped second-order loop
///
/// Both gains land in [0, 1] for any valid bandwidth/damping pair and
/// grow with bandwidth.
pub fn loop_gains(loop_bw: f64, damping: f64) -> (f64, f64) {
    let denom = 1.0 + 2.0 * damping * loop_bw + loop_bw * loop_bw;
    let alpha = 4.0 * damping * loop_bw / denom;
    let beta = 4.0 * loop_bw * loop_bw / denom;
    (alpha, beta)
}

/// Branchless symmetric clip to [-limit, +limit]
#[inline]
fn clip(value: f64, limit: f64) -> f64 {
    0.5 * ((value + limit).abs() - (value - limit).abs())
}

/// Wrap a phase into (-2π, 2π]
///
/// Iterative on purpose: identical on both the setter and the
/// per-sample path, and the iteration count is bounded by how far the
/// input lies outside the range.
#[inline]
fn wrap_phase(mut phase: f64) -> f64 {
    while phase > TWO_PI {
        phase -= TWO_PI;
    }
    while phase < -TWO_PI {
        phase += TWO_PI;
    }
    phase
}

/// Mutable state of the phase/frequency tracking loop
///
/// Phase is kept in (-2π, 2π], frequency in [min_freq, max_freq] after
/// every update. Private to one receiver instance; no internal locking.
#[derive(Debug, Clone)]
pub struct TrackingLoop {
    phase: f64,
    freq: f64,
    min_freq: f64,
    max_freq: f64,
    loop_bw: f64,
    damping: f64,
    alpha: f64,
    beta: f64,
}

impl TrackingLoop {
    /// Create a tracking loop with zero initial phase and frequency
    ///
    /// The damping factor starts at sqrt(2)/2 (critically damped) so the
    /// gains derived from `loop_bw` are valid immediately.
    pub fn new(loop_bw: f64, min_freq: f64, max_freq: f64) -> Result<Self, RecoveryError> {
        let mut tracking = Self {
            phase: 0.0,
            freq: 0.0,
            min_freq,
            max_freq,
            loop_bw: 0.0,
            damping: FRAC_1_SQRT_2,
            alpha: 0.0,
            beta: 0.0,
        };
        tracking.set_loop_bandwidth(loop_bw)?;
        Ok(tracking)
    }

    fn update_gains(&mut self) {
        let (alpha, beta) = loop_gains(self.loop_bw, self.damping);
        self.alpha = alpha;
        self.beta = beta;
    }

    /// Set the normalized loop bandwidth and rederive both gains
    pub fn set_loop_bandwidth(&mut self, bw: f64) -> Result<(), RecoveryError> {
        if bw < 0.0 {
            return Err(RecoveryError::InvalidLoopBandwidth(bw));
        }
        self.loop_bw = bw;
        self.update_gains();
        Ok(())
    }

    /// Set the damping factor and rederive both gains
    pub fn set_damping(&mut self, df: f64) -> Result<(), RecoveryError> {
        if !(0.0..=1.0).contains(&df) {
            return Err(RecoveryError::InvalidDamping(df));
        }
        self.damping = df;
        self.update_gains();
        Ok(())
    }

    /// Override the proportional gain directly, bypassing derivation
    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), RecoveryError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(RecoveryError::InvalidAlpha(alpha));
        }
        self.alpha = alpha;
        Ok(())
    }

    /// Override the integral gain directly, bypassing derivation
    pub fn set_beta(&mut self, beta: f64) -> Result<(), RecoveryError> {
        if !(0.0..=1.0).contains(&beta) {
            return Err(RecoveryError::InvalidBeta(beta));
        }
        self.beta = beta;
        Ok(())
    }

    /// Set the frequency estimate, wrapping to the opposite bound when
    /// the request falls outside [min_freq, max_freq]
    pub fn set_frequency(&mut self, freq: f64) {
        if freq > self.max_freq {
            self.freq = self.min_freq;
        } else if freq < self.min_freq {
            self.freq = self.max_freq;
        } else {
            self.freq = freq;
        }
    }

    /// Set the phase estimate, wrapped into (-2π, 2π]
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = wrap_phase(phase);
    }

    /// Feed one decision-derived phase error through the loop filter
    ///
    /// Frequency integrates the error, phase follows frequency plus the
    /// proportional term. Phase is wrapped into (-2π, 2π], frequency is
    /// clipped symmetrically to ±max_freq.
    pub fn advance(&mut self, phase_error: f64) {
        self.freq += self.beta * phase_error;
        self.phase += self.freq + self.alpha * phase_error;
        self.phase = wrap_phase(self.phase);
        self.freq = clip(self.freq, self.max_freq);
    }

    /// Zero the phase and frequency estimates, keeping the gains
    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.freq = 0.0;
    }

    pub fn loop_bandwidth(&self) -> f64 {
        self.loop_bw
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn frequency(&self) -> f64 {
        self.freq
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}
