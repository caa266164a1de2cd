/// ATX heading syntax: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns `(level, text)` when `line` is an ATX heading.
    ///
    /// The marker run must be followed by whitespace or end the line, so
    /// `#tag` is not a heading. A closing `#` run separated by whitespace is
    /// dropped from the text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let level = u8::try_from(level).ok()?;
        Some((level, Self::strip_closing(rest.trim())))
    }

    fn strip_closing(text: &str) -> &str {
        let open = text.trim_end_matches(Self::MARKER);
        if open.len() == text.len() {
            text
        } else if open.is_empty() {
            ""
        } else if open.ends_with(char::is_whitespace) {
            open.trim_end()
        } else {
            // `C#` keeps its marker
            text
        }
    }
}
