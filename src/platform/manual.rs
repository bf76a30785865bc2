//! Hand-stepped frame driver for native runs and tests

use std::cell::RefCell;
use std::rc::Rc;

use super::{TickCallback, TickDriver};

#[derive(Default)]
struct Inner {
    pending: Option<TickCallback>,
    scheduled: usize,
    cancelled: usize,
}

/// Frame driver whose ticks are fired explicitly
///
/// Clones share the same pending slot, so a caller can keep one clone and
/// hand another to the session.
#[derive(Clone, Default)]
pub struct ManualDriver {
    inner: Rc<RefCell<Inner>>,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pending callback with the given timestamp (ms)
    ///
    /// Returns false when nothing was scheduled.
    pub fn fire(&self, time_ms: f64) -> bool {
        // Release the borrow first: the callback usually reschedules
        let callback = self.inner.borrow_mut().pending.take();
        match callback {
            Some(callback) => {
                callback(time_ms);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Total callbacks scheduled so far
    pub fn scheduled(&self) -> usize {
        self.inner.borrow().scheduled
    }

    /// Total cancellations that dropped a pending callback
    pub fn cancelled(&self) -> usize {
        self.inner.borrow().cancelled
    }
}

impl TickDriver for ManualDriver {
    fn schedule_next_tick(&mut self, callback: TickCallback) {
        let mut inner = self.inner.borrow_mut();
        inner.pending = Some(callback);
        inner.scheduled += 1;
    }

    fn cancel(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.pending.take().is_some() {
            inner.cancelled += 1;
        }
    }
}
