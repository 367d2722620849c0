//! Hero particle canvas: owns the engine plus the 2D context and draws one
//! frame of connections and glowing particles per tick.

use glam::Vec2;
use site_core::{EngineConfig, ParticleEngine, POINTER_ACTIVE_MS};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::debounce::Debounce;
use crate::dom;

pub struct Hero {
    pub engine: Rc<RefCell<ParticleEngine>>,
    ctx: web::CanvasRenderingContext2d,
}

/// Locate `#hero-particles` and wire the simulation to it. A missing
/// canvas or 2D context is a silent no-op; the rest of the page does not
/// depend on this effect.
pub fn setup(document: &web::Document) -> Option<Hero> {
    let canvas = match document
        .get_element_by_id("hero-particles")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => {
            log::warn!("#hero-particles missing; skipping particle field");
            return None;
        }
    };
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())?;

    let (width, height) = dom::size_canvas_to_container(&canvas);
    let seed = js_sys::Date::now() as u64;
    let engine = Rc::new(RefCell::new(ParticleEngine::new(
        width,
        height,
        EngineConfig::default(),
        seed,
    )));
    if dom::prefers_reduced_motion() {
        engine.borrow_mut().set_reduced_motion(true);
    }

    wire_pointer(&canvas, &engine);
    wire_resize(&canvas, &engine);
    wire_motion_preference(&engine);

    Some(Hero { engine, ctx })
}

fn wire_pointer(canvas: &web::HtmlCanvasElement, engine: &Rc<RefCell<ParticleEngine>>) {
    // mousemove: update position, mark active, restart the deactivation timer
    {
        let engine_move = engine.clone();
        let engine_idle = engine.clone();
        let canvas_move = canvas.clone();
        let mut debounce = Debounce::new(POINTER_ACTIVE_MS, move || {
            engine_idle.borrow_mut().pointer_idle();
        });
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = canvas_move.get_bounding_client_rect();
            let pos = Vec2::new(
                ev.client_x() as f32 - rect.left() as f32,
                ev.client_y() as f32 - rect.top() as f32,
            );
            engine_move.borrow_mut().pointer_moved(pos);
            debounce.reset();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mouseleave clears activity immediately
    {
        let engine_leave = engine.clone();
        let closure = Closure::wrap(Box::new(move || {
            engine_leave.borrow_mut().pointer_idle();
        }) as Box<dyn FnMut()>);
        let _ = canvas
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_resize(canvas: &web::HtmlCanvasElement, engine: &Rc<RefCell<ParticleEngine>>) {
    let Some(window) = web::window() else { return };
    let canvas_resize = canvas.clone();
    let engine_resize = engine.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, height) = dom::size_canvas_to_container(&canvas_resize);
        engine_resize.borrow_mut().resize(width, height);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_motion_preference(engine: &Rc<RefCell<ParticleEngine>>) {
    let query = web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten());
    let Some(query) = query else { return };
    let engine_pref = engine.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        engine_pref.borrow_mut().set_reduced_motion(ev.matches());
    }) as Box<dyn FnMut(_)>);
    let _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

impl Hero {
    /// Render the current simulation state. The clear uses the background
    /// color at very low alpha so previous frames linger as a short trail.
    pub fn render(&self) {
        let engine = self.engine.borrow();
        let config = engine.config();
        let (width, height) = (engine.width() as f64, engine.height() as f64);

        self.ctx
            .set_fill_style_str(&config.background_color.to_css(0.02));
        self.ctx.fill_rect(0.0, 0.0, width, height);

        // Proximity connections
        let accent = config.accent_color.to_css(1.0);
        self.ctx.set_stroke_style_str(&accent);
        self.ctx.set_line_width(1.0);
        for connection in engine.connections() {
            let a = engine.particles[connection.a].position;
            let b = engine.particles[connection.b].position;
            self.ctx.set_global_alpha(connection.alpha as f64);
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.stroke();
        }

        // Particles: soft radial glow plus a solid core
        for particle in &engine.particles {
            let (x, y) = (particle.position.x as f64, particle.position.y as f64);
            let radius = particle.radius as f64;
            self.ctx.set_global_alpha(particle.opacity as f64);
            if let Ok(gradient) =
                self.ctx
                    .create_radial_gradient(x, y, 0.0, x, y, radius * 3.0)
            {
                let _ = gradient.add_color_stop(0.0, &accent);
                let _ = gradient.add_color_stop(1.0, "transparent");
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx.begin_path();
                let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
                self.ctx.fill();
            }
            self.ctx.set_fill_style_str(&accent);
            self.ctx.begin_path();
            let _ = self.ctx.arc(x, y, radius * 0.5, 0.0, TAU);
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }
}
