//! Background ambient-audio player.
//!
//! Probes the candidate MP3 paths first; when none is present the player
//! renders the core's synthesized loop into an `AudioBuffer` instead. The
//! probe result is an explicit `Result` so the fallback decision lives
//! here, not in log output.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{
    render_ambient_channel, TrackError, AMBIENT_LOOP_SECONDS, AMBIENT_TRACK_PATHS,
    DEFAULT_MUSIC_VOLUME,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;

const VISUALIZER_BARS: usize = 32;

pub struct MusicPlayer {
    audio_ctx: Option<web::AudioContext>,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    gain: Option<web::GainNode>,
    playing: bool,
    muted: bool,
    volume: f32,
    start_time: f64,
    pause_time: f64,

    control: web::HtmlElement,
    panel: web::HtmlElement,
    mute_button: web::HtmlElement,
    slider: web::HtmlInputElement,
    visualizer: web::HtmlElement,
    bars: Vec<web::HtmlElement>,
}

pub fn setup(document: &web::Document) {
    if dom::prefers_reduced_motion() {
        log::info!("background music disabled under reduced motion");
        return;
    }
    let Some(player) = build_ui(document) else {
        return;
    };
    let player = Rc::new(RefCell::new(player));

    // Resolve the audio buffer off the critical path.
    {
        let player = player.clone();
        spawn_local(async move {
            let audio_ctx = match web::AudioContext::new() {
                Ok(ctx) => ctx,
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return;
                }
            };
            let buffer = match probe_user_track(&audio_ctx).await {
                Ok(buffer) => {
                    log::info!("user background track loaded");
                    buffer
                }
                Err(TrackError::NotFound) => match synthesize_track(&audio_ctx) {
                    Some(buffer) => {
                        log::info!("no user track found; synthesized ambient loop");
                        buffer
                    }
                    None => return,
                },
            };
            let mut p = player.borrow_mut();
            p.audio_ctx = Some(audio_ctx);
            p.buffer = Some(buffer);
        });
    }

    wire_controls(document, &player);
}

/// Try each candidate path in order; `NotFound` means the synthetic loop
/// should be used.
async fn probe_user_track(audio_ctx: &web::AudioContext) -> Result<web::AudioBuffer, TrackError> {
    for path in AMBIENT_TRACK_PATHS {
        match fetch_and_decode(audio_ctx, path).await {
            Ok(buffer) => return Ok(buffer),
            Err(e) => log::debug!("no background track at {path}: {:?}", e),
        }
    }
    Err(TrackError::NotFound)
}

async fn fetch_and_decode(
    audio_ctx: &web::AudioContext,
    path: &str,
) -> Result<web::AudioBuffer, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str("not ok"));
    }
    let array_buffer: js_sys::ArrayBuffer =
        JsFuture::from(response.array_buffer()?).await?.dyn_into()?;
    let decoded = JsFuture::from(audio_ctx.decode_audio_data(&array_buffer)?).await?;
    decoded.dyn_into()
}

/// Render the core's ambient loop into a stereo buffer; each channel gets
/// its own noise.
fn synthesize_track(audio_ctx: &web::AudioContext) -> Option<web::AudioBuffer> {
    let sample_rate = audio_ctx.sample_rate();
    let length = AMBIENT_LOOP_SECONDS * sample_rate as u32;
    let buffer = audio_ctx.create_buffer(2, length, sample_rate).ok()?;
    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    for channel in 0..2 {
        let mut samples = render_ambient_channel(sample_rate as u32, &mut rng);
        if buffer.copy_to_channel(&mut samples, channel).is_err() {
            return None;
        }
    }
    Some(buffer)
}

fn build_ui(document: &web::Document) -> Option<MusicPlayer> {
    let body = document.body()?;

    let control: web::HtmlElement = document.create_element("button").ok()?.dyn_into().ok()?;
    control.set_class_name("music-control paused");
    let _ = control.set_attribute("aria-label", "Play background music");
    control.set_inner_html(
        "<svg class=\"music-control-icon\" viewBox=\"0 0 24 24\"><path d=\"M8 5v14l11-7z\"/></svg>",
    );

    let panel: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    panel.set_class_name("volume-control");
    panel.set_inner_html(
        "<h4>Background Music</h4>\
         <input type=\"range\" class=\"volume-slider\" min=\"0\" max=\"1\" step=\"0.1\">\
         <div class=\"volume-controls\">\
            <button class=\"volume-btn mute-btn\">Mute</button>\
            <button class=\"volume-btn close-btn\">Close</button>\
         </div>",
    );

    let visualizer: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    visualizer.set_class_name("audio-visualizer");
    let mut bars = Vec::with_capacity(VISUALIZER_BARS);
    for _ in 0..VISUALIZER_BARS {
        let bar: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        bar.set_class_name("visualizer-bar");
        let _ = visualizer.append_child(&bar);
        bars.push(bar);
    }

    let _ = body.append_child(&control);
    let _ = body.append_child(&panel);
    let _ = body.append_child(&visualizer);

    let slider: web::HtmlInputElement = panel
        .query_selector(".volume-slider")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;
    slider.set_value(&DEFAULT_MUSIC_VOLUME.to_string());
    let mute_button: web::HtmlElement = panel
        .query_selector(".mute-btn")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    Some(MusicPlayer {
        audio_ctx: None,
        buffer: None,
        source: None,
        gain: None,
        playing: false,
        muted: false,
        volume: DEFAULT_MUSIC_VOLUME,
        start_time: 0.0,
        pause_time: 0.0,
        control,
        panel,
        mute_button,
        slider,
        visualizer,
        bars,
    })
}

fn wire_controls(document: &web::Document, player: &Rc<RefCell<MusicPlayer>>) {
    {
        let player = player.clone();
        let control = player.borrow().control.clone();
        dom::add_click_listener(&control, move || {
            let mut p = player.borrow_mut();
            if p.playing {
                p.pause();
            } else {
                p.play();
            }
        });
    }
    {
        let player = player.clone();
        let mute = player.borrow().mute_button.clone();
        dom::add_click_listener(&mute, move || {
            player.borrow_mut().toggle_mute();
        });
    }
    {
        // Right-click on the control opens the volume panel.
        let player_menu = player.clone();
        let control = player.borrow().control.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let _ = player_menu.borrow().panel.class_list().toggle("visible");
        }) as Box<dyn FnMut(_)>);
        let _ = control
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    if let Ok(Some(close)) = player.borrow().panel.query_selector(".close-btn") {
        let player = player.clone();
        dom::add_click_listener(&close, move || {
            let _ = player.borrow().panel.class_list().remove_1("visible");
        });
    }
    {
        // Clicking anywhere outside the control and the panel dismisses it.
        let player = player.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let p = player.borrow();
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .map(|node| {
                    p.control.contains(Some(&node)) || p.panel.contains(Some(&node))
                })
                .unwrap_or(false);
            if !inside {
                let _ = p.panel.class_list().remove_1("visible");
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let player = player.clone();
        let slider = player.borrow().slider.clone();
        let slider_read = slider.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(value) = slider_read.value().parse::<f32>() {
                player.borrow_mut().set_volume(value);
            }
        }) as Box<dyn FnMut()>);
        let _ =
            slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        // Pause when the tab goes to the background.
        let player = player.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if doc.hidden() {
                let mut p = player.borrow_mut();
                if p.playing {
                    p.pause();
                }
            }
        }) as Box<dyn FnMut()>);
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }
    {
        // Autoplay policy: the first user gesture resumes a suspended context.
        let player = player.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(ctx) = &player.borrow().audio_ctx {
                if ctx.state() == web::AudioContextState::Suspended {
                    let _ = ctx.resume();
                }
            }
        }) as Box<dyn FnMut()>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl MusicPlayer {
    fn play(&mut self) {
        let (Some(ctx), Some(buffer)) = (&self.audio_ctx, &self.buffer) else {
            log::warn!("audio not ready yet");
            return;
        };
        if ctx.state() == web::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Ok(source) = ctx.create_buffer_source() else { return };
        let Ok(gain) = ctx.create_gain() else { return };
        let Ok(analyser) = ctx.create_analyser() else { return };
        analyser.set_fft_size(128);
        analyser.set_smoothing_time_constant(0.8);

        source.set_buffer(Some(buffer));
        source.set_loop(true);
        let _ = source.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&analyser);
        let _ = analyser.connect_with_audio_node(&ctx.destination());
        gain.gain()
            .set_value(if self.muted { 0.0 } else { self.volume });

        // The source loops, so fold the resume offset back into the buffer.
        let duration = buffer.duration();
        let offset = if duration > 0.0 {
            self.pause_time % duration
        } else {
            0.0
        };
        if source
            .start_with_when_and_grain_offset(0.0, offset)
            .is_err()
        {
            return;
        }
        self.start_time = ctx.current_time() - offset;
        self.source = Some(source);
        self.gain = Some(gain);
        self.playing = true;
        self.update_ui();
        self.start_visualization(analyser);
    }

    fn pause(&mut self) {
        if let (Some(ctx), Some(source)) = (&self.audio_ctx, self.source.take()) {
            self.pause_time = ctx.current_time() - self.start_time;
            let _ = source.stop();
        }
        self.playing = false;
        let _ = self.visualizer.class_list().remove_1("visible");
        for bar in &self.bars {
            let _ = bar.style().set_property("height", "4px");
        }
        self.update_ui();
    }

    fn set_volume(&mut self, value: f32) {
        self.volume = value.clamp(0.0, 1.0);
        if let Some(gain) = &self.gain {
            gain.gain()
                .set_value(if self.muted { 0.0 } else { self.volume });
        }
        self.slider.set_value(&self.volume.to_string());
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(gain) = &self.gain {
            gain.gain()
                .set_value(if self.muted { 0.0 } else { self.volume });
        }
        self.update_ui();
    }

    fn update_ui(&self) {
        let classes = self.control.class_list();
        if self.playing {
            let _ = classes.remove_1("paused");
            let _ = classes.add_1("playing");
        } else {
            let _ = classes.remove_1("playing");
            let _ = classes.add_1("paused");
        }
        let _ = classes.toggle_with_force("muted", self.muted);
        self.mute_button
            .set_text_content(Some(if self.muted { "Unmute" } else { "Mute" }));
        let _ = self.control.set_attribute(
            "aria-label",
            if self.playing {
                "Pause background music"
            } else {
                "Play background music"
            },
        );
    }

    /// Drive the bar heights from the analyser until playback stops. The
    /// loop re-checks the shared playing flag each frame, so `pause`
    /// terminates it without a cancellation token.
    fn start_visualization(&self, analyser: web::AnalyserNode) {
        let _ = self.visualizer.class_list().add_1("visible");
        let bars = self.bars.clone();
        let visualizer = self.visualizer.clone();
        let mut data = vec![0u8; analyser.frequency_bin_count() as usize];

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !visualizer.class_list().contains("visible") {
                return;
            }
            analyser.get_byte_frequency_data(&mut data);
            for (i, bar) in bars.iter().enumerate() {
                let value = data.get(i).copied().unwrap_or(0);
                let height = (value as f32 / 255.0 * 40.0).max(4.0);
                let _ = bar.style().set_property("height", &format!("{height}px"));
            }
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
            let _ =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }
}
