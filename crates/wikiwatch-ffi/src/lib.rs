//! UniFFI bindings for the wikiwatch WearOS app
//!
//! Exposes the markup parser, the auto-linker and site URL building to
//! Kotlin. Everything here is a thin conversion layer; behaviour lives in
//! `wikiwatch-engine`.

use wikiwatch_engine::{TextRun, WikiSite};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid site: {reason}")]
    InvalidSite { reason: String },
}

// ============ DTOs ============

/// A styled span of text, ready to map onto an AnnotatedString range.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct TextRunDto {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Raw link target (title, relative path or URL) if the run is clickable
    pub link_target: Option<String>,
    /// Tooltip text for the link
    pub link_title: Option<String>,
}

impl TextRunDto {
    fn from_engine(run: TextRun) -> Self {
        let (link_target, link_title) = match run.link {
            Some(link) => (Some(link.target), Some(link.title)),
            None => (None, None),
        };
        Self {
            text: run.text,
            bold: run.style.bold,
            italic: run.style.italic,
            link_target,
            link_title,
        }
    }
}

fn to_dtos(runs: Vec<TextRun>) -> Vec<TextRunDto> {
    runs.into_iter().map(TextRunDto::from_engine).collect()
}

// ============ Site Handle ============

/// A wiki language edition, used to build article URLs.
#[derive(uniffi::Object)]
pub struct WikiSiteHandle {
    inner: WikiSite,
}

#[uniffi::export]
impl WikiSiteHandle {
    #[uniffi::constructor]
    pub fn new(language: String, host: String) -> Result<Self, FfiError> {
        let inner = WikiSite::new(&language, &host).map_err(|e| FfiError::InvalidSite {
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }

    /// English Wikipedia.
    #[uniffi::constructor]
    pub fn default_site() -> Self {
        Self {
            inner: WikiSite::default(),
        }
    }

    pub fn language(&self) -> String {
        self.inner.language().to_string()
    }

    pub fn base_url(&self) -> String {
        self.inner.base_url()
    }

    pub fn article_url(&self, title: String) -> String {
        self.inner.article_url(&title)
    }

    pub fn mobile_html_url(&self, title: String) -> String {
        self.inner.mobile_html_url(&title)
    }

    pub fn app_deep_link(&self, title: String) -> String {
        self.inner.app_deep_link(&title)
    }
}

// ============ Standalone Functions ============

/// Parse feed/summary markup (`a`, `b`, `i`, `&nbsp;`) into styled runs.
#[uniffi::export]
pub fn parse_markup(markup: String) -> Vec<TextRunDto> {
    to_dtos(wikiwatch_engine::parse_markup(&markup))
}

/// Link occurrences of `titles` in plain `text`.
#[uniffi::export]
pub fn auto_link(text: String, titles: Vec<String>) -> Vec<TextRunDto> {
    to_dtos(wikiwatch_engine::auto_link(&text, titles.as_slice()))
}

/// Resolve a clicked link target to the article title it names.
#[uniffi::export]
pub fn title_from_href(href: String) -> String {
    wikiwatch_engine::title_from_href(&href)
}
