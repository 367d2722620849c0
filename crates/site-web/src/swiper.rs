//! Case-study swiper: DOM wiring around the core paging state.

use site_core::CarouselState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const PREV_ICON: &str = "<svg width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\"><path d=\"M15 18l-6-6 6-6\"/></svg>";
const NEXT_ICON: &str = "<svg width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\"><path d=\"M9 18l6-6-6-6\"/></svg>";

struct SwiperDom {
    wrapper: web::HtmlElement,
    prev: web::HtmlButtonElement,
    next: web::HtmlButtonElement,
    bullets: Vec<web::Element>,
}

fn apply(state: &CarouselState, dom: &SwiperDom) {
    let _ = dom.wrapper.style().set_property(
        "transform",
        &format!("translateX(-{}%)", state.translate_percent()),
    );
    dom.prev.set_disabled(state.at_start());
    dom.next.set_disabled(state.at_end());
    for (i, bullet) in dom.bullets.iter().enumerate() {
        let _ = bullet
            .class_list()
            .toggle_with_force("swiper-pagination-bullet-active", i == state.current);
    }
}

fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0) as f32
}

pub fn setup(document: &web::Document) {
    let Ok(Some(swiper)) = document.query_selector(".project-swiper") else {
        return;
    };
    let Ok(Some(wrapper)) = swiper.query_selector(".swiper-wrapper") else {
        return;
    };
    let Ok(wrapper) = wrapper.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let total = wrapper
        .query_selector_all(".swiper-slide")
        .map(|slides| slides.length() as usize)
        .unwrap_or(0);
    let Ok(Some(pagination)) = swiper.query_selector(".swiper-pagination") else {
        return;
    };

    let make_button = |class: &str, icon: &str, label: &str| -> Option<web::HtmlButtonElement> {
        let button: web::HtmlButtonElement =
            document.create_element("button").ok()?.dyn_into().ok()?;
        button.set_class_name(class);
        button.set_inner_html(icon);
        let _ = button.set_attribute("aria-label", label);
        let _ = swiper.append_child(&button);
        Some(button)
    };
    let Some(prev) = make_button("swiper-button-prev", PREV_ICON, "Previous slide") else {
        return;
    };
    let Some(next) = make_button("swiper-button-next", NEXT_ICON, "Next slide") else {
        return;
    };

    pagination.set_inner_html("");
    let mut bullets = Vec::with_capacity(total);
    for _ in 0..total {
        if let Ok(bullet) = document.create_element("div") {
            bullet.set_class_name("swiper-pagination-bullet");
            let _ = pagination.append_child(&bullet);
            bullets.push(bullet);
        }
    }

    let state = Rc::new(RefCell::new(CarouselState::new(total, viewport_width())));
    let shared = Rc::new(SwiperDom {
        wrapper,
        prev,
        next,
        bullets,
    });
    apply(&state.borrow(), &shared);

    for (i, bullet) in shared.bullets.iter().enumerate() {
        let state = state.clone();
        let shared = shared.clone();
        dom::add_click_listener(bullet, move || {
            state.borrow_mut().go_to(i);
            apply(&state.borrow(), &shared);
        });
    }
    {
        let state = state.clone();
        let shared = shared.clone();
        dom::add_click_listener(&shared.clone().prev, move || {
            state.borrow_mut().prev();
            apply(&state.borrow(), &shared);
        });
    }
    {
        let state = state.clone();
        let shared = shared.clone();
        dom::add_click_listener(&shared.clone().next, move || {
            state.borrow_mut().next();
            apply(&state.borrow(), &shared);
        });
    }

    // Re-evaluate slides-per-view on resize.
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            state.borrow_mut().set_viewport_width(viewport_width());
            apply(&state.borrow(), &shared);
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
