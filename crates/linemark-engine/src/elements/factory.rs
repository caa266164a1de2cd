use super::{
    Element,
    kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak},
};

/// Builds one [`Element`] from one normalized line.
///
/// Implementations must be total: a line that matches no known syntax still
/// produces an element.
pub trait ElementFactory {
    fn build(&self, line: &str) -> Element;
}

impl<F> ElementFactory for F
where
    F: Fn(&str) -> Element,
{
    fn build(&self, line: &str) -> Element {
        self(line)
    }
}

/// Classifies lines using markdown block syntax, falling back to paragraphs.
///
/// Fences are tried first, then thematic breaks (so `- - -` is a rule rather
/// than a list item), headings, block quotes and list items.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownElementFactory;

impl ElementFactory for MarkdownElementFactory {
    fn build(&self, line: &str) -> Element {
        if let Some((fence, info)) = CodeFence::parse(line) {
            return Element::CodeFence {
                fence,
                info: info.to_string(),
            };
        }
        if ThematicBreak::matches(line) {
            return Element::ThematicBreak;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return Element::Heading {
                level,
                text: text.to_string(),
            };
        }
        if let Some((depth, text)) = BlockQuote::parse(line) {
            return Element::BlockQuote {
                depth,
                text: text.to_string(),
            };
        }
        if let Some((marker, text)) = ListItem::parse(line) {
            return Element::ListItem {
                marker,
                text: text.to_string(),
            };
        }
        Element::Paragraph {
            text: line.to_string(),
        }
    }
}
