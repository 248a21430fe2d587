//! Two-beat heartbeat cycle composition against a BPM budget

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

use crate::drivers::PulseLed;
use crate::pattern::ramp::{ramp, RampSpec};
use crate::pattern::EasingFn;

/// Fixed timing bundle for one heartbeat shape. Built once at startup
/// (const context), immutable afterwards.
#[derive(Clone, Copy)]
pub struct HeartbeatTiming {
    /// Target tempo in beats (full two-pulse cycles) per minute.
    pub bpm: u16,
    /// First beat rise time in ms.
    pub up1_ms: u16,
    /// First beat decay time in ms.
    pub down1_ms: u16,
    /// Pause between the two beats in ms.
    pub gap_ms: u16,
    /// Second beat rise time in ms.
    pub up2_ms: u16,
    /// Second beat decay time in ms.
    pub down2_ms: u16,
    /// Peak brightness of the first beat, 0..1.
    pub peak1: f32,
    /// Peak brightness of the second beat, 0..1.
    pub peak2: f32,
}

impl HeartbeatTiming {
    /// A zero `bpm` fails here, at compile time for const bundles.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        bpm: u16,
        up1_ms: u16,
        down1_ms: u16,
        gap_ms: u16,
        up2_ms: u16,
        down2_ms: u16,
        peak1: f32,
        peak2: f32,
    ) -> Self {
        assert!(bpm > 0, "bpm must be positive");
        Self {
            bpm,
            up1_ms,
            down1_ms,
            gap_ms,
            up2_ms,
            down2_ms,
            peak1,
            peak2,
        }
    }

    /// Full cycle period for the configured tempo, floored to whole ms.
    pub fn cycle_ms(&self) -> u16 {
        60_000 / self.bpm
    }

    /// Time consumed by the two beats and the gap.
    pub fn used_ms(&self) -> u16 {
        self.up1_ms + self.down1_ms + self.gap_ms + self.up2_ms + self.down2_ms
    }

    /// Idle tail that pads the cycle out to the tempo. Zero (never
    /// negative) when the beat shape alone overruns the period; the
    /// cycle then simply runs over-tempo.
    pub fn rest_ms(&self) -> u16 {
        self.cycle_ms().saturating_sub(self.used_ms())
    }
}

/// One complete heartbeat: sharp first pulse, short gap, softer second
/// pulse, then rest until the next cycle is due.
///
/// The five phases always execute in full, in order, with no branching.
pub fn heartbeat_cycle<P, D>(
    led: &mut PulseLed<P>,
    delay: &mut D,
    timing: &HeartbeatTiming,
    ease: EasingFn,
) where
    P: PwmPin<Duty = u16>,
    D: DelayMs<u16>,
{
    // First beat
    ramp(led, delay, &RampSpec::new(0.0, timing.peak1, timing.up1_ms), ease);
    ramp(led, delay, &RampSpec::new(timing.peak1, 0.0, timing.down1_ms), ease);

    // Pause between beats; level is already 0 from the decay
    delay.delay_ms(timing.gap_ms);

    // Second beat
    ramp(led, delay, &RampSpec::new(0.0, timing.peak2, timing.up2_ms), ease);
    ramp(led, delay, &RampSpec::new(timing.peak2, 0.0, timing.down2_ms), ease);

    let rest = timing.rest_ms();
    if rest > 0 {
        delay.delay_ms(rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::easing;
    use crate::testing::{RecordingDelay, RecordingPwm};

    const CALM: HeartbeatTiming = HeartbeatTiming::new(45, 160, 410, 340, 140, 270, 0.95, 0.65);

    #[test]
    fn budget_matches_tempo() {
        assert_eq!(CALM.cycle_ms(), 1_333);
        assert_eq!(CALM.used_ms(), 1_320);
        assert_eq!(CALM.rest_ms(), 13);
    }

    #[test]
    fn rest_is_floored_at_zero_when_over_tempo() {
        let fast = HeartbeatTiming::new(200, 160, 410, 340, 140, 270, 0.95, 0.65);
        assert_eq!(fast.cycle_ms(), 300);
        assert_eq!(fast.used_ms(), 1_320);
        assert_eq!(fast.rest_ms(), 0);
    }

    #[test]
    fn cycle_sleeps_gap_and_rest() {
        let mut led = PulseLed::new(RecordingPwm::new(10_000), 1.0, 1.0);
        let mut delay = RecordingDelay::new();

        heartbeat_cycle(&mut led, &mut delay, &CALM, easing::ease_in_out_cubic);

        // Four ramps of 91 steps each, one gap, one rest
        assert_eq!(delay.slept_ms.len(), 4 * 91 + 2);
        assert_eq!(delay.slept_ms[91 * 2], 340);
        assert_eq!(*delay.slept_ms.last().unwrap(), 13);
    }

    #[test]
    fn cycle_reaches_both_peaks_and_ends_dark() {
        let timing = HeartbeatTiming::new(45, 160, 410, 340, 140, 270, 0.75, 0.5);
        let mut led = PulseLed::new(RecordingPwm::new(10_000), 1.0, 1.0);
        let mut delay = RecordingDelay::new();

        heartbeat_cycle(&mut led, &mut delay, &timing, easing::ease_in_out_cubic);

        let pwm = led.shutdown();
        let peak = pwm.duties.iter().copied().max().unwrap();
        assert_eq!(peak, 7_500);
        // Second peak is hit exactly at the end of its rise ramp
        assert!(pwm.duties.contains(&5_000));
        // Last level before shutdown is the end of the second decay
        assert_eq!(pwm.duties[pwm.duties.len() - 2], 0);
    }

    #[test]
    fn over_tempo_cycle_skips_the_rest_delay() {
        let fast = HeartbeatTiming::new(200, 100, 100, 50, 100, 100, 0.5, 0.25);
        let mut led = PulseLed::new(RecordingPwm::new(10_000), 1.0, 1.0);
        let mut delay = RecordingDelay::new();

        heartbeat_cycle(&mut led, &mut delay, &fast, easing::ease_in_out_cubic);

        // Gap is the only bare delay; no trailing rest entry
        assert_eq!(delay.slept_ms.len(), 4 * 91 + 1);
    }
}
