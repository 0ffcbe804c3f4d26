//! Core traits for the carrier recovery engine
//!
//! These traits define mathematical behavior, not standards or waveforms.
//! The receiver couples to symbol decision through a capability trait,
//! not a subclass hierarchy.

mod constellation;

pub use constellation::{Constellation, Decision};

pub(crate) use constellation::phase_error_to;
