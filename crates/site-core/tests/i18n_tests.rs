// Host-side tests for language detection and the translation tables.

use site_core::{detect_language, I18n, Lang};

#[test]
fn saved_preference_wins_over_browser_language() {
    assert_eq!(detect_language(Some("pt"), Some("en-US")), Lang::Pt);
    assert_eq!(detect_language(Some("es"), Some("pt-BR")), Lang::Es);
    assert_eq!(detect_language(Some("en"), Some("es-ES")), Lang::En);
}

#[test]
fn invalid_saved_preference_falls_back_to_browser_language() {
    assert_eq!(detect_language(Some("fr"), Some("pt-BR")), Lang::Pt);
    assert_eq!(detect_language(Some(""), Some("es-419")), Lang::Es);
}

#[test]
fn browser_language_matches_on_prefix() {
    assert_eq!(detect_language(None, Some("pt")), Lang::Pt);
    assert_eq!(detect_language(None, Some("pt-PT")), Lang::Pt);
    assert_eq!(detect_language(None, Some("es-MX")), Lang::Es);
    assert_eq!(detect_language(None, Some("de-DE")), Lang::En);
}

#[test]
fn english_is_the_default_when_nothing_is_known() {
    assert_eq!(detect_language(None, None), Lang::En);
}

#[test]
fn language_codes_round_trip() {
    for lang in [Lang::En, Lang::Es, Lang::Pt] {
        assert_eq!(Lang::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Lang::from_code("xx"), None);
}

#[test]
fn every_language_covers_the_same_keys() {
    let i18n = I18n::new();
    // Spot keys the page always renders; each must resolve in all languages.
    for key in [
        "metaTitle",
        "heroTitle",
        "navServices",
        "contactSubtitle",
        "contactEmailPlaceholder",
        "footerRights",
    ] {
        for lang in [Lang::En, Lang::Es, Lang::Pt] {
            assert!(
                i18n.translate(lang, key).is_some(),
                "missing {key} for {:?}",
                lang
            );
        }
    }
}

#[test]
fn translations_differ_between_languages() {
    let i18n = I18n::new();
    let en = i18n.translate(Lang::En, "navServices").unwrap();
    let es = i18n.translate(Lang::Es, "navServices").unwrap();
    let pt = i18n.translate(Lang::Pt, "navServices").unwrap();
    assert_ne!(en, es);
    assert_ne!(es, pt);
}

#[test]
fn unknown_keys_resolve_to_none() {
    let i18n = I18n::new();
    assert_eq!(i18n.translate(Lang::En, "nope"), None);
}
