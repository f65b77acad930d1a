use std::borrow::Cow;

use crate::runs::{Link, RunBuilder, TextRun};

use super::{
    attrs::extract_attribute,
    cursor::Cursor,
    frames::{FrameStack, StyleFrame},
    kinds::{Nbsp, TagKind, TagSyntax, TagToken},
};

/// Parses the restricted HTML dialect used in feed and summary snippets into
/// styled runs.
///
/// Recognised tags are `a` (with a double-quoted `href`), `b` and `i`; any
/// other tag is skipped without effect. `&nbsp;` and U+00A0 become spaces.
///
/// Never fails. A `<` with no later `>` ends the scan and the rest of the
/// input is dropped. Frames still open at the end are discarded.
///
/// Adjacent text with the same style and link is merged into one run, so the
/// result has no two neighbouring runs that render identically.
pub fn parse_markup(markup: &str) -> Vec<TextRun> {
    let mut cur = Cursor::new(markup);
    let mut frames = FrameStack::default();
    let mut out = RunBuilder::default();

    while !cur.eof() {
        let Some(tag_start) = cur.find(TagSyntax::OPEN) else {
            emit_text(&mut out, &frames, cur.rest());
            cur.finish();
            break;
        };

        emit_text(&mut out, &frames, cur.slice_to(tag_start));

        let Some(tag_end) = cur.find_from(tag_start + 1, TagSyntax::CLOSE) else {
            log::debug!(
                "unterminated tag at byte {tag_start}, dropping {} trailing bytes",
                markup.len() - tag_start
            );
            break;
        };

        apply_tag(&mut frames, &markup[tag_start + 1..tag_end]);
        cur.jump_to(tag_end + 1);
    }

    out.finish()
}

fn apply_tag(frames: &mut FrameStack, content: &str) {
    match TagToken::classify(content) {
        TagToken::Close { name } => {
            if let Some(kind) = TagKind::from_name(&name) {
                let closed = frames.close(kind);
                log::trace!("</{}> closed {closed} frames", kind.name());
            }
        }
        TagToken::Open { name, raw } => match TagKind::from_name(&name) {
            Some(TagKind::Anchor) => match anchor_link(raw) {
                Some(link) => frames.push(StyleFrame::anchor(link)),
                None => log::debug!("ignoring anchor without href: <{raw}>"),
            },
            Some(TagKind::Bold) => frames.push(StyleFrame::bold()),
            Some(TagKind::Italic) => frames.push(StyleFrame::italic()),
            None => {}
        },
    }
}

fn anchor_link(raw: &str) -> Option<Link> {
    let href = extract_attribute(raw, "href")?;
    let title = extract_attribute(raw, "title").unwrap_or(href);
    Some(Link::with_title(href, title))
}

fn emit_text(out: &mut RunBuilder, frames: &FrameStack, text: &str) {
    if text.is_empty() {
        return;
    }
    let text = replace_nbsp(text);
    out.push_merged(&text, frames.style(), frames.link());
}

fn replace_nbsp(text: &str) -> Cow<'_, str> {
    if !text.contains(Nbsp::ENTITY) && !text.contains(Nbsp::CHAR) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace(Nbsp::ENTITY, " ").replace(Nbsp::CHAR, " "))
}
