//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the host:
//! - `Clock` abstracts the monotonic time source (`SystemClock`, `ManualClock`)
//! - one `FrameClock` per surface produces clamped per-frame `FrameTime`

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
