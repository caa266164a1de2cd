/// Line-ending convention detected for a whole document.
///
/// Detection is global: one style is picked per input and used for every
/// break. Mixed endings are not reconciled. When `CrLf` is detected, a bare
/// `\n` elsewhere in the input stays embedded inside its line. When `Lf` is
/// detected, a stray `\r` at a line end is removed by trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Windows-style `\r\n`.
    CrLf,
    /// Unix-style `\n`.
    Lf,
}

impl LineEnding {
    /// Picks `CrLf` if the sequence occurs anywhere in `text`, `Lf` otherwise.
    pub fn detect(text: &str) -> Self {
        if text.contains(Self::CrLf.as_str()) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// The separator this style splits on.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Splits raw text into trimmed, non-empty lines.
///
/// Blank lines are dropped entirely, so positions in the result do not map
/// back to source line numbers. Never fails; empty or whitespace-only input
/// yields an empty vector.
pub fn normalize(text: &str) -> Vec<String> {
    let ending = LineEnding::detect(text);

    let lines: Vec<String> = text
        .split(ending.as_str())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    log::trace!("normalized {} lines using {ending:?} endings", lines.len());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn drops_blank_lines_and_trims() {
        assert_eq!(
            normalize("# Title\n\nSome text\n"),
            vec!["# Title", "Some text"]
        );
    }

    #[test]
    fn crlf_input_splits_on_crlf() {
        assert_eq!(normalize("A\r\nB\r\n"), vec!["A", "B"]);
    }

    #[rstest]
    #[case("", LineEnding::Lf)]
    #[case("one line", LineEnding::Lf)]
    #[case("a\nb", LineEnding::Lf)]
    #[case("a\r\nb", LineEnding::CrLf)]
    #[case("a\nb\r\nc", LineEnding::CrLf)]
    #[case("a\rb", LineEnding::Lf)]
    fn detects_line_ending(#[case] input: &str, #[case] expected: LineEnding) {
        assert_eq!(LineEnding::detect(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\n\n")]
    #[case("\r\n \r\n\t\r\n")]
    fn whitespace_only_input_is_empty(#[case] input: &str) {
        assert!(normalize(input).is_empty());
    }

    #[test]
    fn mixed_endings_keep_bare_newline_inside_line() {
        // CRLF wins, so the lone `\n` between "a" and "b" is not a break.
        let lines = normalize("a\nb\r\nc");
        assert_eq!(lines, vec!["a\nb", "c"]);
    }

    #[test]
    fn lf_detection_trims_trailing_carriage_return() {
        assert_eq!(normalize("  first\r"), vec!["first"]);
        assert_eq!(normalize("a\r\rb"), vec!["a\r\rb"]);
    }

    #[test]
    fn preserves_order_and_closes_gaps() {
        let lines = normalize("one\n\n  \ntwo\n\n\nthree");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn no_line_is_empty_or_whitespace() {
        let inputs = [
            "  \t\n- item\n\n   > quote  \n\t\n",
            "x\r\n\r\n\r\ny",
            " \u{a0}\n\u{3000}\nword",
        ];
        for input in inputs {
            for line in normalize(input) {
                assert!(!line.trim().is_empty(), "blank line from {input:?}");
                assert_eq!(line, line.trim());
            }
        }
    }
}
