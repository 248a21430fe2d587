//! Timed brightness transitions, split into discrete eased steps

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

use crate::drivers::PulseLed;
use crate::pattern::EasingFn;

/// Default step count per ramp, fine enough that the eye sees a
/// continuous fade at the durations this firmware uses.
const DEFAULT_STEPS: u16 = 90;

/// One brightness transition. Built right before a ramp executes and
/// consumed synchronously by [`ramp`].
pub struct RampSpec {
    pub start: f32,
    pub end: f32,
    pub duration_ms: u16,
    pub steps: u16,
}

impl RampSpec {
    pub fn new(start: f32, end: f32, duration_ms: u16) -> Self {
        Self {
            start,
            end,
            duration_ms,
            steps: DEFAULT_STEPS,
        }
    }

    pub fn with_steps(mut self, steps: u16) -> Self {
        self.steps = steps;
        self
    }

    /// Per-step blocking delay. Floors at 1 ms so very short ramps
    /// still make forward progress.
    pub fn step_delay_ms(&self) -> u16 {
        (self.duration_ms / self.steps.max(1)).max(1)
    }
}

/// Walk brightness from `spec.start` to `spec.end` over roughly
/// `spec.duration_ms`, shaping intermediate levels with `ease`.
///
/// The first step emits exactly `start` and the last exactly `end`,
/// independent of step count or rounding in between. Total wall time is
/// `(steps + 1) * step_delay_ms`, which may undershoot the requested
/// duration by up to `steps` milliseconds; the delay primitive is
/// integer-millisecond, so that drift is accepted.
pub fn ramp<P, D>(led: &mut PulseLed<P>, delay: &mut D, spec: &RampSpec, ease: EasingFn)
where
    P: PwmPin<Duty = u16>,
    D: DelayMs<u16>,
{
    let steps = spec.steps.max(1);
    let step_delay = spec.step_delay_ms();

    for i in 0..=steps {
        let eased = ease(i as f32 / steps as f32);
        led.set_level(spec.start + (spec.end - spec.start) * eased);
        delay.delay_ms(step_delay);
    }
}
