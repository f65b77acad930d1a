/// A forward-only cursor over markup source.
///
/// Positions are byte offsets into `s`. Every position the cursor stops at is
/// either `0`, `s.len()`, or just past an ASCII delimiter, so slicing `s` at
/// any returned position is always on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unscanned remainder.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Absolute position of the next `b` at or after the cursor.
    pub fn find(&self, b: u8) -> Option<usize> {
        self.find_from(self.i, b)
    }

    /// Absolute position of the next `b` at or after `from`.
    pub fn find_from(&self, from: usize, b: u8) -> Option<usize> {
        let bytes = self.s.as_bytes();
        if from >= bytes.len() {
            return None;
        }
        bytes[from..].iter().position(|&c| c == b).map(|p| from + p)
    }

    /// Text between the cursor and `end`.
    pub fn slice_to(&self, end: usize) -> &'a str {
        &self.s[self.i..end]
    }

    /// Moves the cursor to `pos`, which must not be behind it.
    pub fn jump_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.i, "cursor moved backwards");
        self.i = pos;
    }

    /// Moves the cursor to the end of input.
    pub fn finish(&mut self) {
        self.i = self.s.len();
    }
}
