//! Interpreting link targets found in feed markup.
//!
//! Anchors in feed snippets point at articles in several shapes: a bare
//! title, `./Title`, `/wiki/Title`, `wiki/Title` or a full URL. The parsers
//! keep the raw `href`; this is where callers turn it back into a title.

/// Resolves an `href` to the article title it points at.
///
/// Strips a leading `./`, keeps the last path segment of `http(s)` URLs and
/// drops `/wiki/` or `wiki/` prefixes. Percent-escapes are decoded when they
/// form valid UTF-8, then underscores become spaces.
pub fn title_from_href(href: &str) -> String {
    let href = href.strip_prefix("./").unwrap_or(href);

    let raw = if href.starts_with("http") {
        href.rsplit('/').next().unwrap_or(href)
    } else if let Some(rest) = href.strip_prefix("/wiki/") {
        rest
    } else if let Some(rest) = href.strip_prefix("wiki/") {
        rest
    } else {
        href.trim_start_matches('/')
    };

    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    decoded.replace('_', " ")
}
