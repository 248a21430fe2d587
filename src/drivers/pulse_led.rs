//! Gamma-corrected brightness driver for a single PWM-dimmed LED

use embedded_hal::PwmPin;
use libm::powf;

/// Map a linear brightness level to a physical duty fraction.
///
/// `level` is clamped to [0, 1]; clamping is the policy for
/// out-of-range input, not an error. `max_level` caps peak output and
/// `gamma` (> 1) compresses low levels so the fade looks linear to the
/// eye, which perceives brightness on a power curve.
pub fn gamma_duty(level: f32, max_level: f32, gamma: f32) -> f32 {
    let level = level.clamp(0.0, 1.0);
    powf(level * max_level, gamma)
}

/// A dimmable LED behind a PWM channel.
///
/// Owns the PWM handle for its whole lifetime; the native duty
/// resolution is read from the driver once at construction, whatever
/// width the peripheral exposes.
pub struct PulseLed<P> {
    pwm: P,
    max_duty: f32,
    max_level: f32,
    gamma: f32,
}

impl<P: PwmPin<Duty = u16>> PulseLed<P> {
    pub fn new(mut pwm: P, max_level: f32, gamma: f32) -> Self {
        let max_duty = pwm.get_max_duty() as f32;
        pwm.enable();
        Self {
            pwm,
            max_duty,
            max_level,
            gamma,
        }
    }

    /// Set perceived brightness in [0, 1]. Same input, same duty:
    /// the write is idempotent.
    pub fn set_level(&mut self, level: f32) {
        let duty = gamma_duty(level, self.max_level, self.gamma);
        self.pwm.set_duty((duty * self.max_duty) as u16);
    }

    /// Force the output dark and disconnect it, handing the raw PWM
    /// handle back for peripheral teardown.
    pub fn shutdown(mut self) -> P {
        self.set_level(0.0);
        self.pwm.disable();
        self.pwm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPwm;

    #[test]
    fn gamma_duty_matches_configured_curve() {
        // 0.95^2.2, the full-brightness duty with the stock config
        assert!((gamma_duty(1.0, 0.95, 2.2) - 0.8933).abs() < 2e-3);
        assert_eq!(gamma_duty(0.0, 0.95, 2.2), 0.0);
    }

    #[test]
    fn gamma_duty_is_monotonic_in_level() {
        let mut prev = 0.0f32;
        for i in 0..=20 {
            let v = gamma_duty(i as f32 / 20.0, 0.95, 2.2);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn out_of_range_levels_clamp() {
        let mut led = PulseLed::new(RecordingPwm::new(65_535), 0.95, 2.2);
        led.set_level(1.5);
        led.set_level(1.0);
        led.set_level(-0.3);
        led.set_level(0.0);

        let pwm = led.shutdown();
        assert_eq!(pwm.duties[0], pwm.duties[1]);
        assert_eq!(pwm.duties[2], pwm.duties[3]);
        assert_eq!(pwm.duties[2], 0);
    }

    #[test]
    fn duty_scales_to_the_native_resolution() {
        let mut led = PulseLed::new(RecordingPwm::new(65_535), 1.0, 1.0);
        led.set_level(0.5);
        let pwm = led.shutdown();
        assert_eq!(pwm.duties[0], 32_767);
    }

    #[test]
    fn repeated_writes_are_idempotent() {
        let mut led = PulseLed::new(RecordingPwm::new(13_333), 0.95, 2.2);
        led.set_level(0.65);
        led.set_level(0.65);
        let pwm = led.shutdown();
        assert_eq!(pwm.duties[0], pwm.duties[1]);
    }

    #[test]
    fn shutdown_zeroes_and_disables() {
        let mut led = PulseLed::new(RecordingPwm::new(13_333), 0.95, 2.2);
        led.set_level(0.8);
        let pwm = led.shutdown();
        assert_eq!(*pwm.duties.last().unwrap(), 0);
        assert!(!pwm.enabled);
    }
}
