//! Heartbeat LED firmware: drives a single PWM-dimmed LED in a
//! two-beat biological heartbeat pattern at a configured tempo.
//!
//! The waveform engine in [`pattern`] is hardware-independent; the
//! ATmega128 peripherals live behind the `atmega128` feature.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod drivers;
#[cfg(feature = "atmega128")]
pub mod hal;
pub mod pattern;

#[cfg(test)]
pub(crate) mod testing;
