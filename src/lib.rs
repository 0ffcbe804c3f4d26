//! Decision-directed carrier recovery for PSK receivers
//!
//! A digital Costas-style second-order tracking loop coupled to a
//! pluggable symbol decision trait. The receiver walks a complex
//! baseband stream sample by sample: derotate by the current phase
//! estimate, decide the nearest constellation point, feed the residual
//! phase error back into the loop, emit the symbol index.
//!
//! Timing recovery, matched filtering, equalization and framing live in
//! other stages of the receive chain; this crate assumes one sample per
//! symbol at its input.
//!
//! ## Example
//!
//! ```rust
//! use phy_carrier::{ConstellationReceiver, Qpsk};
//! use num_complex::Complex64;
//!
//! let mut rx = ConstellationReceiver::new(Qpsk, 0.08, -0.25, 0.25).unwrap();
//!
//! // QPSK signal with a small carrier frequency offset
//! let input: Vec<Complex64> = (0..500)
//!     .map(|k| {
//!         use phy_carrier::Constellation;
//!         Qpsk.point((k % 4) as u8) * Complex64::from_polar(1.0, 0.01 * k as f64)
//!     })
//!     .collect();
//!
//! let mut symbols = vec![0u8; input.len()];
//! let produced = rx.process(&input, &mut symbols, None);
//! assert_eq!(produced, input.len());
//! ```

pub mod constellations;
pub mod error;
pub mod receiver;
pub mod tracking;
pub mod traits;

// Re-export core types for convenience
pub use constellations::{Bpsk, Psk8, Qpsk};
pub use error::RecoveryError;
pub use receiver::{ConstellationReceiver, DiagnosticTaps};
pub use tracking::{loop_gains, TrackingLoop};
pub use traits::{Constellation, Decision};
