use serde::Serialize;

/// Which delimiter opened a fence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    /// The character repeated to form the fence.
    pub const fn fence_char(self) -> char {
        match self {
            Self::Backticks => '`',
            Self::Tildes => '~',
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Recognizes a fence line, returning its kind and trimmed info string.
    ///
    /// Only the line itself is inspected; whether it opens or closes a block
    /// is not known at this level.
    pub fn parse(line: &str) -> Option<(FenceKind, &str)> {
        let kind = if line.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if line.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let info = line.trim_start_matches(kind.fence_char()).trim();
        Some((kind, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(
            CodeFence::parse("```rust"),
            Some((FenceKind::Backticks, "rust"))
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::parse("~~~"), Some((FenceKind::Tildes, "")));
    }

    #[test]
    fn long_fence_run_is_consumed() {
        assert_eq!(
            CodeFence::parse("`````  toml "),
            Some((FenceKind::Backticks, "toml"))
        );
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::parse("hello"), None);
        assert_eq!(CodeFence::parse("``inline``"), None);
        assert_eq!(CodeFence::parse("~~strike~~"), None);
    }
}
