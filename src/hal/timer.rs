//! Millisecond delays on Timer0

use avr_device::atmega128::TC0;
use embedded_hal::blocking::delay::DelayMs;

/// Timer0 prescaler select (CS02:0). Timer0 hangs off its own
/// prescaler on the ATmega128, hence the non-power-of-two gaps.
#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div32 = 3,
    Div64 = 4,
    Div128 = 5,
    Div256 = 6,
    Div1024 = 7,
}

// 16 MHz / 64 = 250 kHz, so one millisecond is 250 timer ticks
const TICKS_PER_MS: u8 = 250;

/// Busy-wait for `ms` milliseconds using Timer0.
pub fn delay_ms(ms: u16) {
    unsafe {
        let p = TC0::ptr();
        (*p).tccr0.write(|w| w.bits(Prescaler::Div64 as u8));

        for _ in 0..ms {
            (*p).tcnt0.write(|w| w.bits(0));
            while (*p).tcnt0.read().bits() < TICKS_PER_MS {}
        }

        (*p).tccr0.write(|w| w.bits(Prescaler::Stop as u8));
    }
}

/// Blocking millisecond delay provider over Timer0.
pub struct Delay {
    _private: (),
}

impl Delay {
    pub fn new() -> Self {
        unsafe {
            (*TC0::ptr()).tccr0.write(|w| w.bits(Prescaler::Stop as u8));
        }
        Self { _private: () }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        delay_ms(ms);
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}
