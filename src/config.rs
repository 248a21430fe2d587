//! Configuration constants for the heartbeat LED firmware
//!
//! Everything here is fixed at build time; there are no runtime knobs.

use crate::pattern::HeartbeatTiming;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate for the serial console
pub const UART_BAUD: u32 = 9600;

/// PWM carrier, high enough to avoid visible flicker
#[cfg(feature = "atmega128")]
pub const PWM_FREQ: crate::hal::pwm::PwmFreq = crate::hal::pwm::PwmFreq::Hz1200;

/// Peak duty ceiling; limits brightness to save batteries and LED lifetime
pub const MAX_LEVEL: f32 = 0.95;

/// Standard perceptual gamma correction exponent
pub const GAMMA: f32 = 2.2;

/// Heartbeat shape, tuned by eye to feel natural
pub const TIMING: HeartbeatTiming = HeartbeatTiming::new(
    45,   // bpm: slow, calm heartbeat
    160,  // first beat: fast rise
    410,  // long, soft decay
    340,  // short pause between the two beats
    140,  // second beat: slightly quicker
    270,  // second decay
    0.95, // first peak
    0.65, // second peak, weaker
);
