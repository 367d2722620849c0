//! Last-write-wins deactivation timer. Each `reset` cancels any pending
//! fire and schedules a fresh one, so at most one timeout is ever live and
//! nothing leaks when events arrive in bursts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Debounce {
    delay_ms: i32,
    handle: Option<i32>,
    on_fire: Closure<dyn FnMut()>,
}

impl Debounce {
    pub fn new(delay_ms: i32, handler: impl FnMut() + 'static) -> Self {
        Self {
            delay_ms,
            handle: None,
            on_fire: Closure::wrap(Box::new(handler) as Box<dyn FnMut()>),
        }
    }

    /// Cancel any pending fire and start the delay over.
    pub fn reset(&mut self) {
        self.cancel();
        if let Some(window) = web::window() {
            self.handle = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    self.on_fire.as_ref().unchecked_ref(),
                    self.delay_ms,
                )
                .ok();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
