/// A single-pass cursor over normalized lines.
///
/// Starts before the first line; `advance` must be called before `current`
/// yields anything. Used by [`crate::Document`] to drive element construction
/// and dropped once the parse is done.
#[derive(Debug, Clone)]
pub(crate) struct LineIterator<'a> {
    /// The normalized lines being walked.
    lines: &'a [String],
    /// `None` until the first `advance`, then an index in `0..=lines.len()`.
    pos: Option<usize>,
}

impl<'a> LineIterator<'a> {
    /// Creates an iterator positioned before the first line.
    pub(crate) fn new(lines: &'a [String]) -> Self {
        Self { lines, pos: None }
    }

    /// Moves to the next line, returning true while still in bounds.
    ///
    /// Once exhausted the position sticks at the end and every further call
    /// returns false.
    pub(crate) fn advance(&mut self) -> bool {
        let next = match self.pos {
            None => 0,
            Some(pos) if pos >= self.lines.len() => return false,
            Some(pos) => pos + 1,
        };
        self.pos = Some(next);
        next < self.lines.len()
    }

    /// Returns the line under the cursor, if any.
    pub(crate) fn current(&self) -> Option<&'a str> {
        self.pos
            .and_then(|pos| self.lines.get(pos))
            .map(String::as_str)
    }
}
