//! Which wiki the app is talking to.
//!
//! A `WikiSite` is an explicit value handed to whatever needs to build
//! URLs. Switching language means building a new site, never mutating a
//! shared one.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_HOST: &str = "wikipedia.org";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("Invalid language code {code:?}: expected ASCII letters, digits or '-'")]
    InvalidLanguage { code: String },

    #[error("Invalid host {host:?}: must be a bare host name")]
    InvalidHost { host: String },
}

/// A language edition of a wiki, e.g. `de` on `wikipedia.org`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WikiSite {
    language: String,
    host: String,
}

impl Default for WikiSite {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl WikiSite {
    /// Validates and builds a site. The language code is lower-cased.
    pub fn new(language: &str, host: &str) -> Result<Self, SiteError> {
        let code = language.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(SiteError::InvalidLanguage {
                code: language.to_string(),
            });
        }
        if host.is_empty() || host.contains('/') || host.chars().any(char::is_whitespace) {
            return Err(SiteError::InvalidHost {
                host: host.to_string(),
            });
        }
        Ok(Self {
            language: code.to_ascii_lowercase(),
            host: host.to_string(),
        })
    }

    /// The same wiki in another language.
    pub fn with_language(&self, language: &str) -> Result<Self, SiteError> {
        Self::new(language, &self.host)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `https://{language}.{host}`, without a trailing slash.
    fn origin(&self) -> String {
        format!("https://{}.{}", self.language, self.host)
    }

    /// Root URL for API clients.
    pub fn base_url(&self) -> String {
        format!("{}/", self.origin())
    }

    /// Desktop/mobile web page of an article.
    pub fn article_url(&self, title: &str) -> String {
        format!("{}/wiki/{}", self.origin(), encode_title(title))
    }

    /// REST endpoint that serves an article as mobile HTML.
    pub fn mobile_html_url(&self, title: &str) -> String {
        format!(
            "{}/api/rest_v1/page/mobile-html/{}",
            self.origin(),
            encode_title(title)
        )
    }

    /// Deep link understood by the Wikipedia phone app.
    pub fn app_deep_link(&self, title: &str) -> String {
        format!(
            "wikipedia://{}.{}/wiki/{}",
            self.language,
            self.host,
            encode_title(title)
        )
    }
}

/// Encodes a title as a URL path segment: spaces become underscores, the rest
/// is percent-encoded.
pub fn encode_title(title: &str) -> String {
    urlencoding::encode(&title.replace(' ', "_")).into_owned()
}
