//! Time subsystem.
//!
//! Provides testable frame timing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per game loop
//! - call `tick()` once per frame to obtain `FrameTime`

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
