use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::cursor::CursorFx;
use crate::hero::Hero;

/// Everything the per-frame tick touches. Built once at init and handed to
/// [`start_loop`]; event listeners mutate the shared engine state that the
/// next frame reads.
pub struct FrameContext {
    pub hero: Option<Hero>,
    pub cursor: Option<CursorFx>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(hero) = &self.hero {
            hero.engine.borrow_mut().step(dt);
            hero.render();
        }
        if let Some(cursor) = &mut self.cursor {
            cursor.frame();
        }
    }
}

/// Handle for the running animation loop. Dropping it does not stop the
/// loop; call [`FrameLoop::stop`] to deregister the next tick.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            // Stopped: simply never reschedule.
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    FrameLoop { running }
}
