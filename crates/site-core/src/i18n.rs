//! Multi-language string tables and language detection.
//!
//! The web frontend substitutes these strings into `[data-lang]` elements;
//! this module owns the tables and the precedence rules so both can be
//! tested off the browser.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Es,
    Pt,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Pt => "pt",
        }
    }

    /// Exact match against a stored preference ("en" / "es" / "pt").
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    /// Prefix match against a BCP 47 browser tag such as "pt-BR" or "es-419".
    pub fn from_browser_tag(tag: &str) -> Lang {
        if tag.starts_with("pt") {
            Lang::Pt
        } else if tag.starts_with("es") {
            Lang::Es
        } else {
            Lang::En
        }
    }
}

/// Detection precedence: a valid saved preference wins, then the browser
/// language prefix, then English.
pub fn detect_language(saved: Option<&str>, browser_tag: Option<&str>) -> Lang {
    if let Some(lang) = saved.and_then(Lang::from_code) {
        return lang;
    }
    browser_tag.map(Lang::from_browser_tag).unwrap_or(Lang::En)
}

/// Translation lookup over the static tables, keyed by the `data-lang`
/// attribute value. Each entry carries the EN/ES/PT strings together.
pub struct I18n {
    map: FnvHashMap<&'static str, [&'static str; 3]>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    pub fn new() -> Self {
        let mut map = FnvHashMap::default();
        // The tables are maintained in lockstep, one row per key.
        for (i, (key, en)) in EN.iter().enumerate() {
            debug_assert_eq!(*key, ES[i].0);
            debug_assert_eq!(*key, PT[i].0);
            map.insert(*key, [*en, ES[i].1, PT[i].1]);
        }
        Self { map }
    }

    pub fn translate(&self, lang: Lang, key: &str) -> Option<&'static str> {
        self.map.get(key).map(|texts| texts[lang as usize])
    }
}

// One entry per `data-lang` key on the page. Values may carry inline markup;
// the frontend injects them as HTML.

const EN: &[(&str, &str)] = &[
    ("metaTitle", "The global agency that turns data into growth"),
    (
        "metaDescription",
        "Full-service marketing agency: strategy, design and data-driven campaigns.",
    ),
    ("metaKeywords", "marketing, agency, growth, data, design"),
    (
        "heroTitle",
        "The <span class=\"text-accent\" data-pulse=\"true\">global agency</span> that turns <span class=\"text-accent\" data-pulse=\"true\">data</span> into growth",
    ),
    ("heroSubtitle", "Strategy, design and technology under one roof."),
    ("navServices", "Services"),
    ("navWork", "Work"),
    ("navTeam", "Team"),
    ("navContact", "Contact"),
    ("ctaPrimary", "Start a project"),
    ("ctaSecondary", "See our work"),
    ("servicesTitle", "What we do"),
    ("workTitle", "Selected case studies"),
    ("teamTitle", "Meet the team"),
    ("contactTitle", "Let's talk"),
    (
        "contactSubtitle",
        "Get a <strong class=\"text-accent\">FREE AI-powered analysis</strong> of your business and a personalized report in 48 hours.",
    ),
    ("contactEmailPlaceholder", "Your email"),
    ("contactWebsitePlaceholder", "Your website"),
    ("footerRights", "All rights reserved."),
];

const ES: &[(&str, &str)] = &[
    ("metaTitle", "La agencia global que convierte datos en crecimiento"),
    (
        "metaDescription",
        "Agencia de marketing integral: estrategia, diseño y campañas basadas en datos.",
    ),
    ("metaKeywords", "marketing, agencia, crecimiento, datos, diseño"),
    (
        "heroTitle",
        "La <span class=\"text-accent\" data-pulse=\"true\">agencia global</span> que convierte <span class=\"text-accent\" data-pulse=\"true\">datos</span> en crecimiento",
    ),
    ("heroSubtitle", "Estrategia, diseño y tecnología bajo un mismo techo."),
    ("navServices", "Servicios"),
    ("navWork", "Proyectos"),
    ("navTeam", "Equipo"),
    ("navContact", "Contacto"),
    ("ctaPrimary", "Iniciar un proyecto"),
    ("ctaSecondary", "Ver nuestro trabajo"),
    ("servicesTitle", "Qué hacemos"),
    ("workTitle", "Casos de estudio seleccionados"),
    ("teamTitle", "Conoce al equipo"),
    ("contactTitle", "Hablemos"),
    (
        "contactSubtitle",
        "Obtén un <strong class=\"text-accent\">análisis GRATUITO impulsado por IA</strong> de tu negocio y un informe personalizado en 48 horas.",
    ),
    ("contactEmailPlaceholder", "Tu correo electrónico"),
    ("contactWebsitePlaceholder", "Tu sitio web"),
    ("footerRights", "Todos los derechos reservados."),
];

const PT: &[(&str, &str)] = &[
    ("metaTitle", "A agência global que transforma dados em crescimento"),
    (
        "metaDescription",
        "Agência de marketing completa: estratégia, design e campanhas orientadas por dados.",
    ),
    ("metaKeywords", "marketing, agência, crescimento, dados, design"),
    (
        "heroTitle",
        "A <span class=\"text-accent\" data-pulse=\"true\">agência global</span> que transforma <span class=\"text-accent\" data-pulse=\"true\">dados</span> em crescimento",
    ),
    ("heroSubtitle", "Estratégia, design e tecnologia sob o mesmo teto."),
    ("navServices", "Serviços"),
    ("navWork", "Projetos"),
    ("navTeam", "Equipa"),
    ("navContact", "Contacto"),
    ("ctaPrimary", "Iniciar um projeto"),
    ("ctaSecondary", "Ver o nosso trabalho"),
    ("servicesTitle", "O que fazemos"),
    ("workTitle", "Casos de estudo selecionados"),
    ("teamTitle", "Conheça a equipa"),
    ("contactTitle", "Vamos conversar"),
    (
        "contactSubtitle",
        "Obtenha uma <strong class=\"text-accent\">análise GRATUITA impulsionada por IA</strong> do seu negócio e um relatório personalizado em 48 horas.",
    ),
    ("contactEmailPlaceholder", "O seu email"),
    ("contactWebsitePlaceholder", "O seu website"),
    ("footerRights", "Todos os direitos reservados."),
];
