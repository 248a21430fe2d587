//! Host-side test doubles for the PWM and delay seams

use std::vec::Vec;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

/// PWM channel double that records every duty write.
pub struct RecordingPwm {
    max_duty: u16,
    pub duties: Vec<u16>,
    pub enabled: bool,
}

impl RecordingPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duties: Vec::new(),
            enabled: false,
        }
    }
}

impl PwmPin for RecordingPwm {
    type Duty = u16;

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn get_duty(&self) -> u16 {
        self.duties.last().copied().unwrap_or(0)
    }

    fn get_max_duty(&self) -> u16 {
        self.max_duty
    }

    fn set_duty(&mut self, duty: u16) {
        self.duties.push(duty);
    }
}

/// Delay double that records requested sleeps instead of blocking.
pub struct RecordingDelay {
    pub slept_ms: Vec<u16>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self { slept_ms: Vec::new() }
    }
}

impl DelayMs<u16> for RecordingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.slept_ms.push(ms);
    }
}
