/// Blockquote syntax, including nested `>>` and spaced `> >` prefixes.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && matches!(b[i], b' ' | b'\t') {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Returns `(depth, text)` when `line` starts with at least one `>`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        match Self::strip_prefixes(line) {
            (0, _) => None,
            (depth, idx) => Some((depth, line[idx..].trim())),
        }
    }
}
