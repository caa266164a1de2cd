use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Marker types for list items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    Dash,          // "-"
    Asterisk,      // "*"
    Plus,          // "+"
    Numbered(u32), // "1.", "2)", etc.
}

pub struct ListItem;

impl ListItem {
    /// Returns `(marker, text)` for bullet and ordered list lines.
    ///
    /// The marker must be followed by whitespace and some content; a bare
    /// `-` or `1.` is not a list item.
    pub fn parse(line: &str) -> Option<(Marker, &str)> {
        Self::parse_bullet(line).or_else(|| Self::parse_ordered(line))
    }

    fn parse_bullet(line: &str) -> Option<(Marker, &str)> {
        let mut chars = line.chars();
        let marker = match chars.next()? {
            '-' => Marker::Dash,
            '*' => Marker::Asterisk,
            '+' => Marker::Plus,
            _ => return None,
        };
        let rest = chars.as_str();
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim();
        (!text.is_empty()).then_some((marker, text))
    }

    fn parse_ordered(line: &str) -> Option<(Marker, &str)> {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordered_regex = ORDERED_REGEX.get_or_init(|| {
            Regex::new(r"(?s)^([0-9]{1,9})[.)]\s+(\S.*)$").expect("Invalid ordered list regex")
        });

        let caps = ordered_regex.captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        let text = caps.get(2)?.as_str().trim_end();
        Some((Marker::Numbered(number), text))
    }
}
