use crate::runs::{Link, RunStyle};

use super::kinds::TagKind;

/// One currently open styling tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFrame {
    pub kind: TagKind,
    /// Present only for anchor frames.
    pub link: Option<Link>,
}

impl StyleFrame {
    pub fn bold() -> Self {
        Self {
            kind: TagKind::Bold,
            link: None,
        }
    }

    pub fn italic() -> Self {
        Self {
            kind: TagKind::Italic,
            link: None,
        }
    }

    pub fn anchor(link: Link) -> Self {
        Self {
            kind: TagKind::Anchor,
            link: Some(link),
        }
    }
}

/// Stack of open frames, innermost last.
///
/// Closing is by name, not by position: `close` drops every open frame of
/// that kind, so misnested markup like `<b><i></b></i>` leaves only the
/// frames whose names were never closed.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<StyleFrame>,
}

impl FrameStack {
    pub fn push(&mut self, frame: StyleFrame) {
        self.frames.push(frame);
    }

    /// Removes all frames of `kind`. Returns how many were removed.
    pub fn close(&mut self, kind: TagKind) -> usize {
        let before = self.frames.len();
        self.frames.retain(|f| f.kind != kind);
        before - self.frames.len()
    }

    pub fn style(&self) -> RunStyle {
        RunStyle {
            bold: self.frames.iter().any(|f| f.kind == TagKind::Bold),
            italic: self.frames.iter().any(|f| f.kind == TagKind::Italic),
        }
    }

    /// Link of the innermost open anchor.
    pub fn link(&self) -> Option<&Link> {
        self.frames.iter().rev().find_map(|f| f.link.as_ref())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
