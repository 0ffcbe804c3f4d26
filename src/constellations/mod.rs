//! Constellation implementations
//!
//! The PSK family used by the HF waveforms:
//! - BPSK (1 bit/symbol)
//! - QPSK (2 bits/symbol)
//! - 8-PSK (3 bits/symbol)

mod bpsk;
mod psk8;
mod qpsk;

pub use bpsk::Bpsk;
pub use psk8::Psk8;
pub use qpsk::Qpsk;
