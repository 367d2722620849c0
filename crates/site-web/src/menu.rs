//! Mobile slide-out menu: class toggling on the overlay and panel.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

fn set_open(
    button: &web::Element,
    overlay: &web::Element,
    content: &web::Element,
    open: bool,
) {
    if open {
        let _ = button.class_list().add_1("active");
        let _ = overlay.class_list().remove_2("hidden", "opacity-0");
        let _ = content.class_list().remove_1("translate-x-full");
    } else {
        let _ = button.class_list().remove_1("active");
        let _ = overlay.class_list().add_2("hidden", "opacity-0");
        let _ = content.class_list().add_1("translate-x-full");
    }
}

pub fn setup(document: &web::Document) {
    let (Some(button), Some(overlay), Some(content)) = (
        document.get_element_by_id("menu-btn"),
        document.get_element_by_id("menu-overlay"),
        document.get_element_by_id("menu-content"),
    ) else {
        log::warn!("menu markup incomplete; skipping slide-out menu");
        return;
    };

    {
        let (b, o, c) = (button.clone(), overlay.clone(), content.clone());
        dom::add_click_listener(&button, move || {
            let open = o.class_list().contains("hidden");
            set_open(&b, &o, &c, open);
        });
    }

    // Clicking the dimmed backdrop closes the panel; clicks inside the
    // sliding content bubble up with a different target and are ignored.
    {
        let (b, o, c) = (button.clone(), overlay.clone(), content.clone());
        let backdrop: web::EventTarget = overlay.clone().into();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if ev.target().as_ref() == Some(&backdrop) {
                set_open(&b, &o, &c, false);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = overlay
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Any menu link closes the panel again.
    let (b, o, c) = (button.clone(), overlay.clone(), content);
    dom::for_each_element(document, ".menu-link", |link| {
        let (b, o, c) = (b.clone(), o.clone(), c.clone());
        dom::add_click_listener(&link, move || {
            set_open(&b, &o, &c, false);
        });
    });
}
