//! requestAnimationFrame driver

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{TickCallback, TickDriver};

/// Schedules frames with `window.requestAnimationFrame`
#[derive(Debug, Default)]
pub struct RafDriver {
    handle: Option<i32>,
}

impl RafDriver {
    pub fn new() -> Self {
        Self { handle: None }
    }
}

impl TickDriver for RafDriver {
    fn schedule_next_tick(&mut self, callback: TickCallback) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; cannot schedule animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| callback(time));
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}
