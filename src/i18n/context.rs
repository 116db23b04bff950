//! Language and document location selectors
//!
//! A [`Context`] decides which language is requested and where the document
//! for a language lives. The default contexts read the language from a host
//! [`Viewer`] and address documents by a host [`Bundle`]; both are injected
//! rather than looked up globally.

use std::fmt;
use std::sync::Arc;

use crate::config::HostConfig;

/// Attribute path the host stores the user's language under
pub const LANGUAGE_ATTRIBUTE: &str = "settings/language";

/// Language every normalized or missing code folds to
pub const DEFAULT_LANGUAGE: &str = "en";

type LanguageSelector = Arc<dyn Fn() -> String + Send + Sync>;
type UrlSelector = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Host settings reader
pub trait Viewer: Send + Sync {
    fn attribute(&self, path: &str) -> Option<String>;
}

/// Host application bundle
pub trait Bundle: Send + Sync {
    fn identifier(&self) -> String;
}

/// Selector pair deciding the requested language and its document URL
#[derive(Clone)]
pub struct Context {
    language: LanguageSelector,
    url: UrlSelector,
}

impl Context {
    /// Create a context from a language selector and a URL builder
    pub fn new<L, U>(language: L, url: U) -> Self
    where
        L: Fn() -> String + Send + Sync + 'static,
        U: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            language: Arc::new(language),
            url: Arc::new(url),
        }
    }

    /// Fixed language with a URL template containing `{language}`
    pub fn fixed(language: impl Into<String>, template: impl Into<String>) -> Self {
        let language = language.into();
        let template = template.into();
        Self::new(move || language.clone(), move |lang| expand_template(&template, lang))
    }

    /// Context reading the language from `viewer`, with documents under
    /// `/bundles/<identifier>/assets/locales/`
    pub fn for_bundle(viewer: Arc<dyn Viewer>, bundle: Arc<dyn Bundle>) -> Self {
        Self::new(viewer_language(viewer), move |lang| {
            format!(
                "/bundles/{}/assets/locales/translation.{}.json",
                urlencoding::encode(&bundle.identifier()),
                urlencoding::encode(lang)
            )
        })
    }

    /// Context reading the language from `viewer`, with documents at the
    /// relative path `assets/locales/`
    pub fn for_viewer(viewer: Arc<dyn Viewer>) -> Self {
        Self::new(viewer_language(viewer), |lang| {
            format!("assets/locales/translation.{}.json", urlencoding::encode(lang))
        })
    }

    /// Default context for a host described by configuration
    pub fn from_host_config(config: &HostConfig) -> Self {
        let host = Arc::new(StaticHost::from(config));
        let locales_path = config.locales_path.trim_matches('/').to_string();
        let prefix = match config.bundle_identifier {
            Some(ref identifier) => format!("/bundles/{}/", urlencoding::encode(identifier)),
            None => String::new(),
        };

        Self::new(viewer_language(host), move |lang| {
            format!(
                "{}{}/translation.{}.json",
                prefix,
                locales_path,
                urlencoding::encode(lang)
            )
        })
    }

    /// Replace the language selector, keeping the URL builder
    pub fn with_language<L>(mut self, language: L) -> Self
    where
        L: Fn() -> String + Send + Sync + 'static,
    {
        self.language = Arc::new(language);
        self
    }

    /// Replace the URL builder, keeping the language selector
    pub fn with_url<U>(mut self, url: U) -> Self
    where
        U: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.url = Arc::new(url);
        self
    }

    /// Same URL builder with the language pinned to `language`
    pub fn forced(&self, language: &str) -> Self {
        let language = language.to_string();
        Self {
            language: Arc::new(move || language.clone()),
            url: Arc::clone(&self.url),
        }
    }

    /// Current language code
    pub fn language(&self) -> String {
        (self.language)()
    }

    /// Document location for `language`
    pub fn url(&self, language: &str) -> String {
        (self.url)(language)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("language", &self.language())
            .finish_non_exhaustive()
    }
}

/// Fold a host language code into the one actually requested.
///
/// Any code containing a `c` (case-insensitive) is requested as English,
/// which catches the host's region-qualified variants.
pub fn normalize_language(code: &str) -> String {
    if code.chars().any(|c| c.eq_ignore_ascii_case(&'c')) {
        DEFAULT_LANGUAGE.to_string()
    } else {
        code.to_string()
    }
}

fn viewer_language(viewer: Arc<dyn Viewer>) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        viewer
            .attribute(LANGUAGE_ATTRIBUTE)
            .map(|code| normalize_language(&code))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }
}

fn expand_template(template: &str, language: &str) -> String {
    template.replace("{language}", &urlencoding::encode(language))
}

/// Host stand-in backed by fixed values
#[derive(Debug, Clone)]
pub struct StaticHost {
    language: String,
    identifier: String,
}

impl StaticHost {
    pub fn new(language: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            identifier: identifier.into(),
        }
    }
}

impl From<&HostConfig> for StaticHost {
    fn from(config: &HostConfig) -> Self {
        Self::new(
            config.language.clone(),
            config.bundle_identifier.clone().unwrap_or_default(),
        )
    }
}

impl Viewer for StaticHost {
    fn attribute(&self, path: &str) -> Option<String> {
        (path == LANGUAGE_ATTRIBUTE).then(|| self.language.clone())
    }
}

impl Bundle for StaticHost {
    fn identifier(&self) -> String {
        self.identifier.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("de"), "de");
        assert_eq!(normalize_language("fr"), "fr");
        assert_eq!(normalize_language("zh-CN"), "en");
        assert_eq!(normalize_language("ca"), "en");
        assert_eq!(normalize_language("c"), "en");
    }

    #[test]
    fn test_bundle_context() {
        let host = Arc::new(StaticHost::new("de", "com.dizmo.my-dizmo"));
        let context = Context::for_bundle(host.clone(), host);
        assert_eq!(context.language(), "de");
        assert_eq!(
            context.url("de"),
            "/bundles/com.dizmo.my-dizmo/assets/locales/translation.de.json"
        );
    }

    #[test]
    fn test_viewer_context_normalizes_and_defaults() {
        let context = Context::for_viewer(Arc::new(StaticHost::new("zh-CN", "")));
        assert_eq!(context.language(), "en");
        assert_eq!(context.url("en"), "assets/locales/translation.en.json");

        struct Empty;
        impl Viewer for Empty {
            fn attribute(&self, _path: &str) -> Option<String> {
                None
            }
        }
        assert_eq!(Context::for_viewer(Arc::new(Empty)).language(), "en");
    }

    #[test]
    fn test_host_config_context() {
        let mut config = HostConfig::default();
        config.language = "fr".to_string();
        let context = Context::from_host_config(&config);
        assert_eq!(context.language(), "fr");
        assert_eq!(context.url("fr"), "assets/locales/translation.fr.json");

        config.bundle_identifier = Some("com.example.app".to_string());
        config.locales_path = "/i18n/".to_string();
        let context = Context::from_host_config(&config);
        assert_eq!(context.url("fr"), "/bundles/com.example.app/i18n/translation.fr.json");
    }

    #[test]
    fn test_partial_override_and_forced_language() {
        let context = Context::fixed("de", "http://host/{language}.json")
            .with_language(|| "it".to_string());
        assert_eq!(context.language(), "it");
        assert_eq!(context.url("it"), "http://host/it.json");

        let forced = context.forced("en");
        assert_eq!(forced.language(), "en");
        assert_eq!(forced.url(&forced.language()), "http://host/en.json");

        let moved = context.with_url(|lang| format!("/{}", lang));
        assert_eq!(moved.url("it"), "/it");
    }
}
