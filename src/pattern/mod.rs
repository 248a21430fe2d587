//! Waveform generation and timing engine: easing, ramps, heartbeat
//! cycles and the run loop. Hardware enters only through the
//! `PwmPin`/`DelayMs` seams, so everything here runs on the host too.

pub mod easing;
pub mod heartbeat;
pub mod ramp;
pub mod runner;

pub use easing::{ease_in_out_cubic, EasingFn};
pub use heartbeat::{heartbeat_cycle, HeartbeatTiming};
pub use ramp::{ramp, RampSpec};
pub use runner::{run, ShutdownSignal};
