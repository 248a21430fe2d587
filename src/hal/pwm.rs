//! PWM (Pulse Width Modulation) HAL implementation
//!
//! Timer1 in fast PWM mode with ICR1 as top, output on OC1A (PB5).
//! The carrier sits well above the flicker-fusion threshold so the LED
//! reads as steady light at any duty.

use avr_device::atmega128::TC1;
use core::marker::PhantomData;
use embedded_hal::PwmPin;

/// PWM carrier frequency presets (16 MHz core clock, /1 prescaler)
#[derive(Clone, Copy)]
pub enum PwmFreq {
    Hz600,
    Hz1200,
    Hz2400,
}

impl PwmFreq {
    /// Timer top value, 16 MHz / carrier.
    fn top(self) -> u16 {
        match self {
            PwmFreq::Hz600 => 26_666,
            PwmFreq::Hz1200 => 13_333,
            PwmFreq::Hz2400 => 6_666,
        }
    }
}

/// PWM peripheral driver
pub struct Pwm<T> {
    _timer: PhantomData<T>,
    top: u16,
}

impl Pwm<TC1> {
    /// Create a new PWM instance on Timer1, clock stopped.
    pub fn new() -> Self {
        unsafe {
            let p = TC1::ptr();
            (*p).tccr1a.write(|w| w.bits(0));
            (*p).tccr1b.write(|w| w.bits(0));
        }
        Self {
            _timer: PhantomData,
            top: 0,
        }
    }

    /// Configure carrier frequency and start the timer.
    ///
    /// Mode 14 fast PWM: ICR1 holds the top, OC1A clears on compare
    /// match (non-inverting), prescaler /1.
    pub fn configure(&mut self, freq: PwmFreq) {
        self.top = freq.top();
        unsafe {
            let p = TC1::ptr();
            (*p).icr1.write(|w| w.bits(self.top));
            (*p).ocr1a.write(|w| w.bits(0));
            (*p).tccr1a.write(|w| w.bits(0x82)); // COM1A1 | WGM11
            (*p).tccr1b.write(|w| w.bits(0x19)); // WGM13 | WGM12 | CS10
        }
    }

    /// Full deinit: stop the timer clock and disconnect the compare
    /// output. The pin falls back to its port value (low).
    pub fn release(&mut self) {
        unsafe {
            let p = TC1::ptr();
            (*p).tccr1a.write(|w| w.bits(0));
            (*p).tccr1b.write(|w| w.bits(0));
            (*p).ocr1a.write(|w| w.bits(0));
        }
    }
}

impl PwmPin for Pwm<TC1> {
    type Duty = u16;

    /// Disconnect OC1A from the pin; the timer keeps counting.
    fn disable(&mut self) {
        unsafe {
            let p = TC1::ptr();
            (*p).tccr1a.modify(|r, w| w.bits(r.bits() & !0xC0));
        }
    }

    /// Reconnect OC1A in non-inverting mode.
    fn enable(&mut self) {
        unsafe {
            let p = TC1::ptr();
            (*p).tccr1a.modify(|r, w| w.bits((r.bits() & !0xC0) | 0x80));
        }
    }

    fn get_duty(&self) -> u16 {
        unsafe { (*TC1::ptr()).ocr1a.read().bits() }
    }

    fn get_max_duty(&self) -> u16 {
        self.top
    }

    fn set_duty(&mut self, duty: u16) {
        let duty = duty.min(self.top);
        unsafe {
            (*TC1::ptr()).ocr1a.write(|w| w.bits(duty));
        }
    }
}

impl Default for Pwm<TC1> {
    fn default() -> Self {
        Self::new()
    }
}
