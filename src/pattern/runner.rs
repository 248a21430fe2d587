//! Top-level repeat loop and shutdown lifecycle

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

use crate::drivers::PulseLed;
use crate::pattern::heartbeat::{heartbeat_cycle, HeartbeatTiming};
use crate::pattern::EasingFn;

/// Cooperative stop request, sampled once per heartbeat cycle.
///
/// An in-flight cycle always completes; the request is acted on at the
/// next cycle boundary.
pub trait ShutdownSignal {
    fn is_requested(&mut self) -> bool;
}

/// Repeat heartbeat cycles until a stop is requested.
///
/// Brightness is forced to zero before the first cycle. On exit the LED
/// is forced dark and the PWM output disconnected, in that order; the
/// raw handle is returned so the caller can finish deinitializing the
/// peripheral.
pub fn run<P, D, S>(
    mut led: PulseLed<P>,
    delay: &mut D,
    timing: &HeartbeatTiming,
    ease: EasingFn,
    shutdown: &mut S,
) -> P
where
    P: PwmPin<Duty = u16>,
    D: DelayMs<u16>,
    S: ShutdownSignal,
{
    led.set_level(0.0);

    while !shutdown.is_requested() {
        heartbeat_cycle(&mut led, delay, timing, ease);
    }

    led.shutdown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::easing;
    use crate::testing::{RecordingDelay, RecordingPwm};

    const TIMING: HeartbeatTiming = HeartbeatTiming::new(45, 160, 410, 340, 140, 270, 0.95, 0.65);

    /// Reports "stop" after a fixed number of polls.
    struct StopAfter(u8);

    impl ShutdownSignal for StopAfter {
        fn is_requested(&mut self) -> bool {
            if self.0 == 0 {
                return true;
            }
            self.0 -= 1;
            false
        }
    }

    #[test]
    fn immediate_shutdown_leaves_duty_zero_and_output_released() {
        let led = PulseLed::new(RecordingPwm::new(10_000), 0.95, 2.2);
        let mut delay = RecordingDelay::new();
        let mut stop = StopAfter(0);

        let pwm = run(led, &mut delay, &TIMING, easing::ease_in_out_cubic, &mut stop);

        // Initial dark level plus the shutdown write; no cycle ran
        assert_eq!(pwm.duties, [0, 0]);
        assert!(!pwm.enabled);
        assert!(delay.slept_ms.is_empty());
    }

    #[test]
    fn runs_whole_cycles_then_cleans_up() {
        let led = PulseLed::new(RecordingPwm::new(10_000), 0.95, 2.2);
        let mut delay = RecordingDelay::new();
        let mut stop = StopAfter(2);

        let pwm = run(led, &mut delay, &TIMING, easing::ease_in_out_cubic, &mut stop);

        // Initial zero + two full cycles of 4 ramps x 91 steps + final zero
        assert_eq!(pwm.duties.len(), 1 + 2 * 4 * 91 + 1);
        assert_eq!(*pwm.duties.last().unwrap(), 0);
        assert!(!pwm.enabled);
    }
}
