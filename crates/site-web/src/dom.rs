use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` over every element matching `selector`.
pub fn for_each_element(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(web::Element),
) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                f(el);
            }
        }
    }
}

/// Size the canvas backing store to its containing element. Returns the
/// logical (width, height) the simulation should use.
pub fn size_canvas_to_container(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let Some(parent) = canvas.parent_element() else {
        return (0.0, 0.0);
    };
    let rect = parent.get_bounding_client_rect();
    let width = rect.width() as u32;
    let height = rect.height() as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f32, height as f32)
}

/// Append a `<style>` block for styles this module owns (cursor, controls).
pub fn inject_styles(document: &web::Document, css: &str) {
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(css));
        if let Some(body) = document.body() {
            let _ = body.append_child(&style);
        }
    }
}
