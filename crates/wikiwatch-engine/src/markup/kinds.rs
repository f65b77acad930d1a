/// Tag delimiters. The parser uses these constants and never hardcodes `<`.
pub struct TagSyntax;

impl TagSyntax {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const END_MARK: char = '/';
}

/// Non-breaking space forms that are rendered as an ordinary space.
pub struct Nbsp;

impl Nbsp {
    pub const ENTITY: &'static str = "&nbsp;";
    pub const CHAR: char = '\u{00A0}';
}

/// The tags that affect styling. Every other tag name is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Anchor,
    Bold,
    Italic,
}

impl TagKind {
    /// Maps an already lower-cased tag name to a known kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" => Some(Self::Anchor),
            "b" => Some(Self::Bold),
            "i" => Some(Self::Italic),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Anchor => "a",
            Self::Bold => "b",
            Self::Italic => "i",
        }
    }
}

/// The inside of a `<...>` pair, split into what the parser needs.
#[derive(Debug, PartialEq, Eq)]
pub enum TagToken<'a> {
    /// `<name attrs...>`, name lower-cased.
    Open { name: String, raw: &'a str },
    /// `</name>`, name trimmed and lower-cased.
    Close { name: String },
}

impl<'a> TagToken<'a> {
    /// Classifies the text between `<` and `>`.
    pub fn classify(content: &'a str) -> Self {
        if let Some(rest) = content.strip_prefix(TagSyntax::END_MARK) {
            return Self::Close {
                name: rest.trim().to_lowercase(),
            };
        }
        let name = content
            .split(|c: char| c.is_ascii_whitespace())
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Self::Open { name, raw: content }
    }
}
