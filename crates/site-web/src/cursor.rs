//! Custom cursor ring with trailing dots. Skipped entirely on touch
//! devices and under reduced motion; the stylesheet below also hides it
//! for those users as a second line of defense.

use glam::Vec2;
use site_core::CursorTrail;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct CursorFx {
    root: web::HtmlElement,
    trail_elements: Vec<web::HtmlElement>,
    trail: CursorTrail,
    mouse: Rc<RefCell<Vec2>>,
}

pub fn setup(document: &web::Document) -> Option<CursorFx> {
    if dom::prefers_reduced_motion() || is_touch_device() {
        return None;
    }
    let body = document.body()?;
    dom::inject_styles(document, CURSOR_CSS);

    let root: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    root.set_class_name("custom-cursor");
    let inner = document.create_element("div").ok()?;
    inner.set_class_name("custom-cursor-inner");
    let _ = root.append_child(&inner);
    let _ = body.append_child(&root);

    let mut trail_elements = Vec::new();
    for _ in 0..site_core::TRAIL_LEN {
        let dot: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        dot.set_class_name("cursor-trail");
        let _ = body.append_child(&dot);
        trail_elements.push(dot);
    }
    let _ = body.style().set_property("cursor", "none");

    let mouse = Rc::new(RefCell::new(Vec2::ZERO));
    wire_events(document, &root, &mouse);

    Some(CursorFx {
        root,
        trail_elements,
        trail: CursorTrail::new(),
        mouse,
    })
}

fn is_touch_device() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}

fn wire_events(document: &web::Document, root: &web::HtmlElement, mouse: &Rc<RefCell<Vec2>>) {
    {
        let mouse_move = mouse.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            *mouse_move.borrow_mut() = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Grow the ring over interactive elements
    let interactive =
        "a, button, [role=\"button\"], .btn-primary, .menu-link, input, textarea, .service-card";
    dom::for_each_element(document, interactive, |el| {
        let ring = root.clone();
        add_class_on_hover(&el, ring, "cursor-hover");
    });
    dom::for_each_element(document, ".text-accent, .btn-primary", |el| {
        let ring = root.clone();
        add_class_on_hover(&el, ring, "cursor-accent");
    });

    // Press feedback
    for (event, add) in [("mousedown", true), ("mouseup", false)] {
        let ring = root.clone();
        let closure = Closure::wrap(Box::new(move || {
            if add {
                let _ = ring.class_list().add_1("cursor-click");
            } else {
                let _ = ring.class_list().remove_1("cursor-click");
            }
        }) as Box<dyn FnMut()>);
        let _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Hide while the pointer is outside the window
    for (event, opacity) in [("mouseleave", "0"), ("mouseenter", "1")] {
        let ring = root.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = ring.style().set_property("opacity", opacity);
        }) as Box<dyn FnMut()>);
        let _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn add_class_on_hover(el: &web::Element, ring: web::HtmlElement, class: &'static str) {
    {
        let ring = ring.clone();
        let enter = Closure::wrap(Box::new(move || {
            let _ = ring.class_list().add_1(class);
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();
    }
    let leave = Closure::wrap(Box::new(move || {
        let _ = ring.class_list().remove_1(class);
    }) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

impl CursorFx {
    /// Advance the trail one frame and push positions into the DOM.
    pub fn frame(&mut self) {
        let target = *self.mouse.borrow();
        let style = self.root.style();
        let _ = style.set_property("left", &format!("{}px", target.x));
        let _ = style.set_property("top", &format!("{}px", target.y));

        self.trail.step(target);
        for (i, (dot, el)) in self.trail.dots().iter().zip(&self.trail_elements).enumerate() {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", dot.position.x));
            let _ = style.set_property("top", &format!("{}px", dot.position.y));
            let _ = style.set_property("opacity", &CursorTrail::opacity(i).to_string());
            let _ = style.set_property("transform", &format!("scale({})", CursorTrail::scale(i)));
        }
    }
}

const CURSOR_CSS: &str = r#"
.custom-cursor {
    position: fixed;
    width: 40px;
    height: 40px;
    border: 2px solid var(--accent);
    border-radius: 50%;
    background: rgba(100, 255, 218, 0.1);
    pointer-events: none;
    z-index: 10000;
    transform: translate(-50%, -50%);
    transition: all 0.15s ease;
    backdrop-filter: blur(2px);
}
.custom-cursor-inner {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 6px;
    height: 6px;
    background: var(--accent);
    border-radius: 50%;
    transform: translate(-50%, -50%);
}
.cursor-trail {
    position: fixed;
    width: 8px;
    height: 8px;
    background: var(--accent);
    border-radius: 50%;
    pointer-events: none;
    z-index: 9999;
    transform: translate(-50%, -50%);
}
.custom-cursor.cursor-hover {
    width: 60px;
    height: 60px;
    background: rgba(100, 255, 218, 0.05);
    border-width: 1px;
}
.custom-cursor.cursor-accent {
    background: rgba(100, 255, 218, 0.2);
    box-shadow: 0 0 20px rgba(100, 255, 218, 0.4);
}
.custom-cursor.cursor-click {
    transform: translate(-50%, -50%) scale(0.8);
}
@media (hover: none) and (pointer: coarse) {
    .custom-cursor, .cursor-trail { display: none !important; }
}
@media (prefers-reduced-motion: reduce) {
    .custom-cursor, .cursor-trail { display: none !important; }
    body { cursor: auto !important; }
}
"#;
