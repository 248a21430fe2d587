use crate::hal::gpio::board::StopBtn;
use crate::hal::gpio::{Input, Pin};
use crate::pattern::ShutdownSignal;
use avr_device::atmega128::PORTD;

/// Latching stop request behind an active-low button.
///
/// The run loop samples this once per heartbeat cycle (roughly every
/// 1.3 s at the stock tempo), so the button must be held until the
/// cycle boundary; a single low sample latches the request for good.
/// Contact bounce is far below that sampling window, no debouncing
/// needed.
pub struct ShutdownButton {
    pin: Pin<PORTD, 0, Input>,
    requested: bool,
}

impl ShutdownButton {
    pub fn new() -> Self {
        Self {
            pin: StopBtn::default().into_pull_up_input(),
            requested: false,
        }
    }
}

impl ShutdownSignal for ShutdownButton {
    fn is_requested(&mut self) -> bool {
        if !self.requested && self.pin.is_low() {
            self.requested = true;
        }
        self.requested
    }
}

impl Default for ShutdownButton {
    fn default() -> Self {
        Self::new()
    }
}
