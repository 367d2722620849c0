//! Scroll-triggered reveal of `[data-aos]` elements: start translated and
//! transparent, ease in once the element intersects the viewport.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn setup(document: &web::Document) {
    if dom::prefers_reduced_motion() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() {
                    let _ = el.style().set_property("opacity", "1");
                    let _ = el.style().set_property("transform", "translateY(0)");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let Ok(observer) = web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();

    dom::for_each_element(document, "[data-aos]", |el| {
        if let Ok(el) = el.clone().dyn_into::<web::HtmlElement>() {
            let _ = el.style().set_property("opacity", "0");
            let _ = el.style().set_property("transform", "translateY(30px)");
            let _ = el
                .style()
                .set_property("transition", "opacity .8s ease, transform .8s ease");
        }
        observer.observe(&el);
    });
}
