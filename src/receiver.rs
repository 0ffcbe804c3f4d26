//! Constellation receiver - decision-directed carrier recovery
//!
//! Per-sample chain: derotate by the current phase estimate, hard-decide
//! the nearest constellation point, feed the residual phase error back
//! through the tracking loop, emit the symbol index. The loop is fully
//! resumable sample-by-sample; no buffering happens across calls.
//!
//! ## Signal flow
//!
//! ```text
//! input → [× exp(jθ)] → decide → symbol out
//!              ↑           ↓ phase error
//!         tracking loop ←──┘
//! ```

use crate::error::RecoveryError;
use crate::tracking::TrackingLoop;
use crate::traits::{Constellation, Decision};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Per-sample diagnostic output streams
///
/// One struct carries all three taps, so diagnostic emission is
/// all-or-nothing: either every stream is connected or none is.
pub struct DiagnosticTaps<'a> {
    /// Phase error fed to the loop for each sample
    pub phase_error: &'a mut [f64],
    /// Phase estimate after each sample's update
    pub phase: &'a mut [f64],
    /// Frequency estimate after each sample's update
    pub frequency: &'a mut [f64],
}

/// Decision-directed carrier recovery receiver
///
/// Owns its tracking state; holds the constellation by value and only
/// ever calls `decide` on it. Single-threaded: one instance is driven
/// by one caller at a time.
pub struct ConstellationReceiver<C: Constellation> {
    constellation: C,
    tracking: TrackingLoop,
}

impl<C: Constellation> ConstellationReceiver<C> {
    /// Create a receiver for a one-dimensional constellation
    ///
    /// Fails when the constellation reports a dimensionality other than 1
    /// or when `loop_bw` is negative; the receiver is never built in
    /// either case.
    pub fn new(
        constellation: C,
        loop_bw: f64,
        min_freq: f64,
        max_freq: f64,
    ) -> Result<Self, RecoveryError> {
        let dimensionality = constellation.dimensionality();
        if dimensionality != 1 {
            return Err(RecoveryError::UnsupportedDimensionality(dimensionality));
        }
        Ok(Self {
            constellation,
            tracking: TrackingLoop::new(loop_bw, min_freq, max_freq)?,
        })
    }

    /// Process one sample
    ///
    /// Returns the hard decision and the derotated sample. The tracking
    /// state has already absorbed this sample's phase error when the call
    /// returns, so the next sample sees the corrected estimate.
    pub fn process_sample(&mut self, sample: Complex64) -> (Decision, Complex64) {
        let nco = Complex64::from_polar(1.0, self.tracking.phase());
        let derotated = nco * sample;
        let decision = self.constellation.decide(derotated);
        self.tracking.advance(decision.phase_error);
        (decision, derotated)
    }

    /// Streaming drive: consume input samples, produce symbol indices
    ///
    /// Processes `min(input.len(), symbols.len())` samples in order
    /// (further bounded by the tap lengths when taps are connected) and
    /// returns the exact count. Input consumption and output production
    /// are tied 1:1. When taps are present, sample k receives its phase
    /// error and the post-update phase and frequency.
    pub fn process(
        &mut self,
        input: &[Complex64],
        symbols: &mut [u8],
        mut taps: Option<&mut DiagnosticTaps<'_>>,
    ) -> usize {
        let mut count = input.len().min(symbols.len());
        if let Some(taps) = taps.as_ref() {
            count = count
                .min(taps.phase_error.len())
                .min(taps.phase.len())
                .min(taps.frequency.len());
        }

        for k in 0..count {
            let (decision, _) = self.process_sample(input[k]);
            symbols[k] = decision.symbol;
            if let Some(taps) = taps.as_mut() {
                taps.phase_error[k] = decision.phase_error;
                taps.phase[k] = self.tracking.phase();
                taps.frequency[k] = self.tracking.frequency();
            }
        }

        count
    }

    /// Tracked frequency offset in Hz for a given sample rate
    pub fn frequency_hz(&self, sample_rate: f64) -> f64 {
        self.tracking.frequency() * sample_rate / (2.0 * PI)
    }

    /// Zero the tracking state, keeping the loop gains
    pub fn reset(&mut self) {
        self.tracking.reset();
    }

    pub fn constellation(&self) -> &C {
        &self.constellation
    }

    pub fn tracking(&self) -> &TrackingLoop {
        &self.tracking
    }

    /// Mutable access for the controlling caller (bandwidth, damping,
    /// gain overrides, explicit phase/frequency presets)
    pub fn tracking_mut(&mut self) -> &mut TrackingLoop {
        &mut self.tracking
    }
}
