//! Type-state GPIO pins for the ports this board actually uses

use avr_device::atmega128::{PORTB, PORTD};
use core::marker::PhantomData;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Default for Pin<PORT, P, MODE> {
    fn default() -> Self {
        Self {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $ddr:ident, $port:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::default()
            }

            /// Floating input.
            pub fn into_input(self) -> Pin<$PORT, P, Input> {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Pin::default()
            }

            /// Input with the internal pull-up enabled, for active-low
            /// switches wired straight to ground.
            pub fn into_pull_up_input(self) -> Pin<$PORT, P, Input> {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::default()
            }
        }

        impl<const P: u8> Pin<$PORT, P, Output> {
            #[inline]
            pub fn set_high(&mut self) {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
            }

            #[inline]
            pub fn set_low(&mut self) {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
            }
        }

        impl<const P: u8> Pin<$PORT, P, Input> {
            #[inline]
            pub fn is_low(&self) -> bool {
                unsafe { (*$PORT::ptr()).$pin.read().bits() & (1 << P) == 0 }
            }

            #[inline]
            pub fn is_high(&self) -> bool {
                !self.is_low()
            }
        }
    };
}

impl_port!(PORTB, ddrb, portb, pinb);
impl_port!(PORTD, ddrd, portd, pind);

/// Board pin assignments
pub mod board {
    use super::{Input, Pin};
    use avr_device::atmega128::{PORTB, PORTD};

    /// OC1A, drives the LED transistor base through 1 kOhm.
    pub type PulsePin = Pin<PORTB, 5, Input>;

    /// Stop button to ground, sampled between heartbeat cycles.
    pub type StopBtn = Pin<PORTD, 0, Input>;
}
