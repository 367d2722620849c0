//! 360° team showcase. Each `.team-member-360` card carries a looping
//! rotation video; the controls drive it through the core's
//! `PlaybackSurface` capability, so a card whose media fails to load can
//! swap in the procedural canvas placeholder without the control wiring
//! noticing.

use site_core::{
    manual_seek_target, PlaybackSurface, RotateDirection, RotationState, ACCENT, BACKGROUND,
};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;

const LAZY_LOAD_THRESHOLD: f64 = 0.1;
const LOADING_TIMEOUT_MS: i32 = 3000;
const PLACEHOLDER_SIZE: f64 = 400.0;

/// What a card actually renders. `Canvas` is the self-animating
/// placeholder, so every playback call is a no-op for it.
pub enum Surface {
    Video(web::HtmlVideoElement),
    Canvas,
}

impl PlaybackSurface for Surface {
    fn play(&self) {
        if let Surface::Video(video) = self {
            let _ = video.play();
        }
    }

    fn pause(&self) {
        if let Surface::Video(video) = self {
            let _ = video.pause();
        }
    }

    fn seek(&self, time_sec: f64) {
        if let Surface::Video(video) = self {
            video.set_current_time(time_sec);
        }
    }

    fn current_time(&self) -> f64 {
        match self {
            Surface::Video(video) => video.current_time(),
            Surface::Canvas => 0.0,
        }
    }

    fn duration(&self) -> f64 {
        match self {
            Surface::Video(video) => video.duration(),
            Surface::Canvas => 0.0,
        }
    }

    fn set_rate(&self, rate: f64) {
        if let Surface::Video(video) = self {
            video.set_playback_rate(rate);
        }
    }
}

pub fn setup(document: &web::Document) {
    let doc = document.clone();
    dom::for_each_element(document, ".team-member-360", move |member| {
        if let Err(e) = setup_member(&doc, &member) {
            log::warn!("team card skipped: {:?}", e);
        }
    });
}

fn setup_member(document: &web::Document, member: &web::Element) -> Result<(), JsValue> {
    let video: web::HtmlVideoElement = member
        .query_selector(".team-360-video")?
        .ok_or_else(|| JsValue::from_str("missing .team-360-video"))?
        .dyn_into()?;
    let container: web::HtmlElement = member
        .query_selector(".video-360-container")?
        .ok_or_else(|| JsValue::from_str("missing .video-360-container"))?
        .dyn_into()?;
    let auto_button: web::HtmlElement = member
        .query_selector(".auto-rotate-btn")?
        .ok_or_else(|| JsValue::from_str("missing .auto-rotate-btn"))?
        .dyn_into()?;

    let _ = container.class_list().add_1("loading");

    let surface = Rc::new(RefCell::new(Surface::Video(video.clone())));
    let state = Rc::new(RefCell::new(RotationState::new()));

    lazy_load(document, member, &video, &container, &surface, &state)?;
    wire_rotate_buttons(member, &surface, &state, &auto_button)?;
    wire_auto_button(&auto_button, &surface, &state);
    wire_hover(member, &surface, &state)?;

    Ok(())
}

/// Drive the surface from the current rotation state.
fn apply_rate(surface: &Surface, state: &RotationState) {
    match state.rate() {
        Some(rate) => {
            surface.set_rate(rate);
            surface.play();
        }
        None => surface.pause(),
    }
}

/// Defer loading the (large) rotation videos until the card scrolls into
/// view.
fn lazy_load(
    document: &web::Document,
    member: &web::Element,
    video: &web::HtmlVideoElement,
    container: &web::HtmlElement,
    surface: &Rc<RefCell<Surface>>,
    state: &Rc<RefCell<RotationState>>,
) -> Result<(), JsValue> {
    let doc = document.clone();
    let member = member.clone();
    let video = video.clone();
    let container = container.clone();
    let surface = surface.clone();
    let state = state.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if video.ready_state() == 0 {
                    video.load();
                }
                if video.get_attribute("data-playback-wired").is_none() {
                    setup_playback(&doc, &member, &video, &container, &surface, &state);
                    let _ = video.set_attribute("data-playback-wired", "true");
                }
                if video.ready_state() >= 2 {
                    let _ = container.class_list().remove_1("loading");
                }
                observer.unobserve(&entry.target());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(LAZY_LOAD_THRESHOLD));
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    observer.observe(member);
    Ok(())
}

fn setup_playback(
    document: &web::Document,
    member: &web::Element,
    video: &web::HtmlVideoElement,
    container: &web::HtmlElement,
    surface: &Rc<RefCell<Surface>>,
    state: &Rc<RefCell<RotationState>>,
) {
    let add_media_listener = |event: &str, f: Box<dyn FnMut()>| {
        let closure = Closure::wrap(f);
        let _ = video.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    };

    {
        let container = container.clone();
        let surface = surface.clone();
        let state = state.clone();
        add_media_listener(
            "loadeddata",
            Box::new(move || {
                let _ = container.class_list().remove_1("loading");
                apply_rate(&surface.borrow(), &state.borrow());
            }),
        );
    }
    {
        let container = container.clone();
        add_media_listener(
            "canplay",
            Box::new(move || {
                let _ = container.class_list().remove_1("loading");
            }),
        );
    }
    {
        // Seamless loop.
        let surface = surface.clone();
        add_media_listener(
            "ended",
            Box::new(move || {
                let s = surface.borrow();
                s.seek(0.0);
                s.play();
            }),
        );
    }
    {
        let document = document.clone();
        let member = member.clone();
        let video = video.clone();
        let container = container.clone();
        let surface = surface.clone();
        add_media_listener(
            "error",
            Box::new(move || {
                log::warn!("team video failed to load; using canvas placeholder");
                let _ = container.class_list().remove_1("loading");
                if let Err(e) = install_placeholder(&document, &member, &video, &container) {
                    log::error!("placeholder setup failed: {:?}", e);
                }
                *surface.borrow_mut() = Surface::Canvas;
            }),
        );
    }

    // Never leave the spinner up when no media event arrives at all.
    let container = container.clone();
    let timeout = Closure::wrap(Box::new(move || {
        if container.class_list().contains("loading") {
            let _ = container.class_list().remove_1("loading");
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            timeout.as_ref().unchecked_ref(),
            LOADING_TIMEOUT_MS,
        );
    }
    timeout.forget();
}

fn wire_rotate_buttons(
    member: &web::Element,
    surface: &Rc<RefCell<Surface>>,
    state: &Rc<RefCell<RotationState>>,
    auto_button: &web::HtmlElement,
) -> Result<(), JsValue> {
    let buttons = member.query_selector_all(".rotate-btn")?;
    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let direction = match button.get_attribute("data-direction").as_deref() {
            Some("left") => RotateDirection::Left,
            _ => RotateDirection::Right,
        };

        let surface = surface.clone();
        let state = state.clone();
        let auto_button = auto_button.clone();
        let pressed = button.clone();
        dom::add_click_listener(&button, move || {
            state.borrow_mut().on_manual_step();
            auto_button.set_text_content(Some("Auto"));
            {
                let s = surface.borrow();
                s.pause();
                s.seek(manual_seek_target(s.current_time(), s.duration(), direction));
            }
            press_feedback(&pressed);
        });
    }
    Ok(())
}

fn wire_auto_button(
    auto_button: &web::HtmlElement,
    surface: &Rc<RefCell<Surface>>,
    state: &Rc<RefCell<RotationState>>,
) {
    let surface = surface.clone();
    let state = state.clone();
    let button = auto_button.clone();
    dom::add_click_listener(auto_button, move || {
        let auto = state.borrow_mut().toggle_auto();
        button.set_text_content(Some(if auto { "Auto" } else { "Play" }));
        apply_rate(&surface.borrow(), &state.borrow());
        press_feedback(&button);
    });
}

/// Short scale bounce on button press.
fn press_feedback(button: &web::HtmlElement) {
    let _ = button.style().set_property("transform", "scale(0.9)");
    let restore = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        let _ = restore.style().set_property("transform", "scale(1)");
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            150,
        );
    }
    closure.forget();
}

fn wire_hover(
    member: &web::Element,
    surface: &Rc<RefCell<Surface>>,
    state: &Rc<RefCell<RotationState>>,
) -> Result<(), JsValue> {
    let wire = |event: &str, hovered: bool| -> Result<(), JsValue> {
        let member_el = member.clone();
        let surface = surface.clone();
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = member_el
                .class_list()
                .toggle_with_force("hovered", hovered);
            let mut st = state.borrow_mut();
            st.set_hovered(hovered);
            if let Some(rate) = st.rate() {
                surface.borrow().set_rate(rate);
            }
        }) as Box<dyn FnMut()>);
        member.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    };
    wire("mouseenter", true)?;
    wire("mouseleave", false)
}

/// Procedural stand-in: rotating spokes around a disc with the member's
/// initials, drawn from `data-member` on the card.
fn install_placeholder(
    document: &web::Document,
    member: &web::Element,
    video: &web::HtmlVideoElement,
    container: &web::HtmlElement,
) -> Result<(), JsValue> {
    let canvas: web::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(PLACEHOLDER_SIZE as u32);
    canvas.set_height(PLACEHOLDER_SIZE as u32);
    canvas.set_class_name(&video.class_name());
    canvas.style().set_property("border-radius", "1.5rem")?;
    video.style().set_property("display", "none")?;
    let video_node: &web::Node = video.as_ref();
    container.insert_before(&canvas, Some(video_node))?;

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let initials = initials_for(member.get_attribute("data-member").as_deref());
    let mut rotation = 0.0f64;
    let center = PLACEHOLDER_SIZE / 2.0;

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.clear_rect(0.0, 0.0, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE);

        if let Ok(gradient) =
            ctx.create_radial_gradient(center, center, 0.0, center, center, center)
        {
            let _ = gradient.add_color_stop(0.0, &ACCENT.to_css(0.2));
            let _ = gradient.add_color_stop(1.0, &BACKGROUND.to_css(0.9));
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.fill_rect(0.0, 0.0, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE);
        }

        ctx.save();
        let _ = ctx.translate(center, center);
        let _ = ctx.rotate(rotation);
        for i in 0..8 {
            ctx.save();
            let _ = ctx.rotate(i as f64 * TAU / 8.0);
            let alpha = 0.3 + (rotation + i as f64).sin() * 0.2;
            ctx.set_fill_style_str(&ACCENT.to_css(alpha as f32));
            ctx.fill_rect(-5.0, -100.0, 10.0, 50.0);
            ctx.restore();
        }
        ctx.restore();

        ctx.begin_path();
        let _ = ctx.arc(center, center, 60.0, 0.0, TAU);
        ctx.set_fill_style_str(&ACCENT.to_css(1.0));
        ctx.fill();

        ctx.set_fill_style_str(&BACKGROUND.to_css(1.0));
        ctx.set_font("bold 24px \"Space Grotesk\", sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(&initials, center, center);

        rotation += 0.01;
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
    Ok(())
}

fn initials_for(member_name: Option<&str>) -> String {
    let initials: String = member_name
        .unwrap_or("")
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .take(2)
        .collect();
    if initials.is_empty() {
        "??".to_owned()
    } else {
        initials
    }
}
