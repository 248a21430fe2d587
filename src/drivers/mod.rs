pub mod pulse_led;
#[cfg(feature = "atmega128")]
pub mod serial_console;
#[cfg(feature = "atmega128")]
pub mod shutdown_button;

pub use pulse_led::PulseLed;
#[cfg(feature = "atmega128")]
pub use serial_console::SerialConsole;
#[cfg(feature = "atmega128")]
pub use shutdown_button::ShutdownButton;
