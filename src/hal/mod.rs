pub mod gpio;
pub mod power;
pub mod pwm;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
pub use power::{Power, SleepMode};
pub use pwm::{Pwm, PwmFreq};
pub use timer::{delay_ms, Delay};
pub use uart::Uart;
