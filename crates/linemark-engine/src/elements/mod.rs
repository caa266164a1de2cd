pub mod factory;
pub mod kinds;

use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

pub use factory::{ElementFactory, MarkdownElementFactory};
pub use kinds::{FenceKind, Marker};

/// A typed unit built from exactly one normalized line.
///
/// Elements are immutable once built. Each variant carries only what its
/// syntax contributes; the surrounding lines are never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Element {
    /// `# Title` through `###### Title`.
    Heading { level: u8, text: String },
    /// One or more `>` prefixes.
    BlockQuote { depth: u8, text: String },
    /// A bullet (`-`, `*`, `+`) or ordered (`1.`, `1)`) list line.
    ListItem { marker: Marker, text: String },
    /// A ```` ``` ```` or `~~~` line, with its info string.
    CodeFence { fence: FenceKind, info: String },
    /// `---`, `***` or `___`.
    ThematicBreak,
    /// Anything not matched by another kind.
    Paragraph { text: String },
}

/// The variant of an [`Element`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Heading,
    BlockQuote,
    ListItem,
    CodeFence,
    ThematicBreak,
    Paragraph,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Heading => "heading",
            ElementKind::BlockQuote => "block_quote",
            ElementKind::ListItem => "list_item",
            ElementKind::CodeFence => "code_fence",
            ElementKind::ThematicBreak => "thematic_break",
            ElementKind::Paragraph => "paragraph",
        };
        f.write_str(name)
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Heading { .. } => ElementKind::Heading,
            Element::BlockQuote { .. } => ElementKind::BlockQuote,
            Element::ListItem { .. } => ElementKind::ListItem,
            Element::CodeFence { .. } => ElementKind::CodeFence,
            Element::ThematicBreak => ElementKind::ThematicBreak,
            Element::Paragraph { .. } => ElementKind::Paragraph,
        }
    }

    /// The textual payload with syntax markers removed.
    ///
    /// For fences this is the info string; thematic breaks have none.
    pub fn text(&self) -> &str {
        match self {
            Element::Heading { text, .. }
            | Element::BlockQuote { text, .. }
            | Element::ListItem { text, .. }
            | Element::Paragraph { text } => text,
            Element::CodeFence { info, .. } => info,
            Element::ThematicBreak => "",
        }
    }

    /// Renders this element as a self-contained HTML fragment.
    pub fn render(&self) -> String {
        match self {
            Element::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", encode_text(text))
            }
            Element::BlockQuote { depth, text } => {
                let depth = usize::from(*depth);
                format!(
                    "{}<p>{}</p>{}",
                    "<blockquote>".repeat(depth),
                    encode_text(text),
                    "</blockquote>".repeat(depth)
                )
            }
            Element::ListItem {
                marker: Marker::Numbered(n),
                text,
            } => format!("<li value=\"{n}\">{}</li>", encode_text(text)),
            Element::ListItem { text, .. } => format!("<li>{}</li>", encode_text(text)),
            Element::CodeFence { info, .. } if info.is_empty() => "<pre><code></code></pre>".into(),
            Element::CodeFence { info, .. } => format!(
                "<pre><code class=\"language-{}\"></code></pre>",
                encode_double_quoted_attribute(info)
            ),
            Element::ThematicBreak => "<hr />".into(),
            Element::Paragraph { text } => format!("<p>{}</p>", encode_text(text)),
        }
    }
}
