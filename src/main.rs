//! Firmware entry: peripheral bring-up, the heartbeat run loop, and
//! the shutdown path.
//!
//! Wiring:
//!   PB5 (OC1A) -> 1k -> 2N2222 base
//!   emitter    -> GND
//!   collector  -> LED cathodes
//!   LED anodes -> 100R -> VCC
//!   PD0        -> stop button -> GND (internal pull-up)

#![no_std]
#![no_main]

use panic_halt as _;

use avr_device::atmega128::Peripherals;
use ufmt::uwriteln;

use heartbeat_firmware::config;
use heartbeat_firmware::drivers::{PulseLed, SerialConsole, ShutdownButton};
use heartbeat_firmware::hal::{board, Delay, Power, Pwm};
use heartbeat_firmware::pattern::{easing, run};

#[avr_device::entry]
fn main() -> ! {
    // Owning the singleton keeps all register access on this one thread
    let _dp = Peripherals::take().unwrap();

    let mut console = SerialConsole::new();
    let mut delay = Delay::new();
    let mut stop = ShutdownButton::new();

    // OC1A must be an output before the compare unit can drive it
    let _pulse_pin = board::PulsePin::default().into_output();
    let mut pwm = Pwm::new();
    pwm.configure(config::PWM_FREQ);

    let led = PulseLed::new(pwm, config::MAX_LEVEL, config::GAMMA);

    uwriteln!(&mut console, "heartbeat v0.1.0, {} bpm", config::TIMING.bpm).ok();

    let mut pwm = run(
        led,
        &mut delay,
        &config::TIMING,
        easing::ease_in_out_cubic,
        &mut stop,
    );

    // Stop observed: LED is already dark, now release the peripheral
    pwm.release();
    console.write_line("stopped, pwm released");

    let mut power = Power::new();
    loop {
        power.enter_power_down();
    }
}
