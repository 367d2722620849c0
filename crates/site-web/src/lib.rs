#![cfg(target_arch = "wasm32")]
//! Browser entry point. Wires every page effect at load and drives the
//! animated ones from a single requestAnimationFrame loop.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod cursor;
mod debounce;
mod dom;
mod frame;
mod hero;
mod language;
mod menu;
mod music;
mod reveal;
mod swiper;
mod team;

use frame::{FrameContext, FrameLoop};

thread_local! {
    static FRAME_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    language::setup(&document);
    menu::setup(&document);
    reveal::setup(&document);
    swiper::setup(&document);
    team::setup(&document);
    music::setup(&document);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        hero: hero::setup(&document),
        cursor: cursor::setup(&document),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);
    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));

    Ok(())
}

/// Stop the animation loop. Event listeners stay registered, but nothing
/// renders after the current frame; intended for embedders that tear the
/// page content down.
#[wasm_bindgen]
pub fn shutdown() {
    FRAME_LOOP.with(|slot| {
        if let Some(frame_loop) = slot.borrow_mut().take() {
            frame_loop.stop();
            log::info!("animation loop stopped");
        }
    });
}
