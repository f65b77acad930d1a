use std::sync::OnceLock;

use regex::Regex;

fn href_regex() -> &'static Regex {
    static HREF: OnceLock<Regex> = OnceLock::new();
    HREF.get_or_init(|| Regex::new(r#"(?i)href="([^"]+)""#).expect("Invalid href regex"))
}

fn title_regex() -> &'static Regex {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    TITLE.get_or_init(|| Regex::new(r#"(?i)title="([^"]+)""#).expect("Invalid title regex"))
}

fn first_capture<'a>(re: &Regex, tag: &'a str) -> Option<&'a str> {
    re.captures(tag)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extracts a double-quoted attribute value from the inside of a tag.
///
/// The attribute name matches case-insensitively and the first occurrence
/// wins. Empty, single-quoted and unquoted values are not recognised.
pub fn extract_attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    match name.to_ascii_lowercase().as_str() {
        "href" => first_capture(href_regex(), tag),
        "title" => first_capture(title_regex(), tag),
        other => {
            let re = Regex::new(&format!(r#"(?i){}="([^"]+)""#, regex::escape(other))).ok()?;
            first_capture(&re, tag)
        }
    }
}
