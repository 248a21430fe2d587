//! Polled USART0 transmitter for the serial console

use avr_device::atmega128::USART0;
use core::convert::Infallible;
use core::marker::PhantomData;

use crate::config;

// Normal speed async mode
const UBRR: u16 = (config::CPU_FREQ_HZ / (16 * config::UART_BAUD) - 1) as u16;

const UCSR0A_UDRE0: u8 = 1 << 5;
const UCSR0B_TXEN0: u8 = 1 << 3;
const UCSR0C_8N1: u8 = 0x06; // UCSZ01 | UCSZ00

pub struct Uart<U> {
    _usart: PhantomData<U>,
}

impl Uart<USART0> {
    /// Transmit-only setup; the console never reads.
    pub fn new() -> Self {
        unsafe {
            let p = USART0::ptr();
            (*p).ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            (*p).ubrr0l.write(|w| w.bits(UBRR as u8));
            (*p).ucsr0b.write(|w| w.bits(UCSR0B_TXEN0));
            (*p).ucsr0c.write(|w| w.bits(UCSR0C_8N1));
        }
        Self { _usart: PhantomData }
    }

    pub fn try_write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & UCSR0A_UDRE0 == 0 {
                return Err(nb::Error::WouldBlock);
            }
            (*p).udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    pub fn write_byte(&mut self, byte: u8) {
        let _ = nb::block!(self.try_write(byte));
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
}

impl Default for Uart<USART0> {
    fn default() -> Self {
        Self::new()
    }
}
