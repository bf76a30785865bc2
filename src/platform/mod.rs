//! Platform abstraction layer
//!
//! Handles browser/native differences for frame scheduling. The mission
//! loop only sees `TickDriver`; the browser implementation sits on
//! `requestAnimationFrame`, the manual one is stepped by hand.

mod manual;
#[cfg(target_arch = "wasm32")]
mod raf;

pub use manual::ManualDriver;
#[cfg(target_arch = "wasm32")]
pub use raf::RafDriver;

/// Callback for one frame, receiving the frame timestamp in milliseconds
pub type TickCallback = Box<dyn FnOnce(f64)>;

/// Schedules one frame callback at a time
pub trait TickDriver {
    /// Run `callback` on the next display refresh, replacing any pending one
    fn schedule_next_tick(&mut self, callback: TickCallback);

    /// Drop the pending callback, if any
    fn cancel(&mut self);
}
