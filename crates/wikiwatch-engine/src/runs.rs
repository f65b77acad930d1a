use serde::Serialize;

/// Formatting flags of a run. Both may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
}

impl RunStyle {
    pub const PLAIN: RunStyle = RunStyle {
        bold: false,
        italic: false,
    };
}

/// Where a clickable run leads.
///
/// `target` is the raw logical target: an article title for auto-links, or
/// whatever the markup's `href` held (bare title, relative path or URL).
/// Interpreting it is up to the caller, see [`crate::links::title_from_href`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    pub target: String,
    /// Tooltip text. Taken from the anchor's `title` attribute, falling back
    /// to the target.
    pub title: String,
}

impl Link {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            title: target.clone(),
            target,
        }
    }

    pub fn with_title(target: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            title: title.into(),
        }
    }
}

/// The atomic output unit of both the markup parser and the auto-linker.
///
/// Concatenating the `text` of every run in a sequence reproduces the visible
/// text of the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
    pub link: Option<Link>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::PLAIN,
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, link: Link) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::PLAIN,
            link: Some(link),
        }
    }

    /// Returns the link target if this run is clickable.
    pub fn link_target(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.target.as_str())
    }

    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }
}

/// Concatenates the text of all runs.
pub fn visible_text(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// Accumulates runs, skipping empty text.
#[derive(Debug, Default)]
pub(crate) struct RunBuilder {
    runs: Vec<TextRun>,
}

impl RunBuilder {
    /// Appends text, extending the previous run when style and link match.
    pub(crate) fn push_merged(&mut self, text: &str, style: RunStyle, link: Option<&Link>) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut()
            && last.style == style
            && last.link.as_ref() == link
        {
            last.text.push_str(text);
            return;
        }
        self.runs.push(TextRun {
            text: text.to_string(),
            style,
            link: link.cloned(),
        });
    }

    /// Appends a run without merging it into its neighbour.
    pub(crate) fn push(&mut self, run: TextRun) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }

    pub(crate) fn finish(self) -> Vec<TextRun> {
        self.runs
    }
}
