//! Applies the core string tables to the document: `[data-lang]` text
//! substitution, active-button state, meta tags, and the `localStorage`
//! preference.

use site_core::{detect_language, I18n, Lang};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const STORAGE_KEY: &str = "userLanguage";

fn saved_language() -> Option<String> {
    web::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

fn save_language(lang: Lang) {
    if let Some(storage) = web::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, lang.code());
    }
}

fn browser_language() -> Option<String> {
    web::window()?.navigator().language()
}

pub fn setup(document: &web::Document) {
    let i18n = Rc::new(I18n::new());
    let detected = detect_language(saved_language().as_deref(), browser_language().as_deref());
    apply(document, &i18n, detected);

    // Language switcher buttons carry their choice in `data-lang-choice`.
    let doc = document.clone();
    dom::for_each_element(document, ".language-btn[data-lang-choice]", move |button| {
        let Some(choice) = button
            .get_attribute("data-lang-choice")
            .and_then(|c| Lang::from_code(&c))
        else {
            return;
        };
        let doc = doc.clone();
        let i18n = i18n.clone();
        dom::add_click_listener(&button, move || {
            set_language(&doc, &i18n, choice);
        });
    });
}

pub fn set_language(document: &web::Document, i18n: &I18n, lang: Lang) {
    save_language(lang);
    apply(document, i18n, lang);
    log::info!("language set to {}", lang.code());
}

fn apply(document: &web::Document, i18n: &I18n, lang: Lang) {
    dom::for_each_element(document, "[data-lang]", |el| {
        let Some(key) = el.get_attribute("data-lang") else { return };
        let Some(text) = i18n.translate(lang, &key) else { return };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_placeholder(text);
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_placeholder(text);
        } else {
            el.set_inner_html(text);
        }
    });

    // Active state on every switcher
    dom::for_each_element(document, ".language-btn", |button| {
        let _ = button.class_list().remove_1("active");
    });
    let selector = format!(".language-btn[data-lang-choice=\"{}\"]", lang.code());
    dom::for_each_element(document, &selector, |button| {
        let _ = button.class_list().add_1("active");
    });

    // Meta tags
    if let Some(title) = i18n.translate(lang, "metaTitle") {
        document.set_title(title);
    }
    if let Some(description) = i18n.translate(lang, "metaDescription") {
        if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
            let _ = meta.set_attribute("content", description);
        }
    }
    if let Some(keywords) = i18n.translate(lang, "metaKeywords") {
        if let Ok(Some(meta)) = document.query_selector("meta[name=\"keywords\"]") {
            let _ = meta.set_attribute("content", keywords);
        }
    }
}
