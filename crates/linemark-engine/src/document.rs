use std::fmt;
use std::io;
use std::path::Path;

use crate::elements::{Element, ElementFactory, MarkdownElementFactory};
use crate::io::{FileReader, FsReader};
use crate::parsing::{LineIterator, normalize};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file could not be read. Display and source are the I/O error's own.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DocumentError {
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            DocumentError::Io(e) => e.kind(),
        }
    }
}

/// A parsed sequence of elements with a forward-only cursor.
///
/// Each non-blank line of the input becomes exactly one [`Element`], in
/// source order. The cursor starts before the first element:
///
/// ```rust
/// # use linemark_engine::{Document, ElementKind};
/// let mut doc = Document::new();
/// doc.parse_str("# Title\n\nSome text\n").unwrap();
/// assert_eq!(doc.len(), 2);
///
/// assert!(doc.advance());
/// assert_eq!(doc.current().map(|e| e.kind()), Some(ElementKind::Heading));
/// assert!(doc.advance());
/// assert!(!doc.advance());
/// assert!(doc.current().is_none());
///
/// doc.reset();
/// assert!(doc.advance());
/// ```
///
/// A `Document` is not meant to be shared across threads; every state change
/// takes `&mut self`.
pub struct Document {
    elements: Vec<Element>,
    /// `None` before the first `advance`; otherwise an index, at most the
    /// length of the elements at the time it was last moved.
    cursor: Option<usize>,
    reader: Box<dyn FileReader>,
    factory: Box<dyn ElementFactory>,
}

impl Document {
    /// Creates an empty document that reads from the filesystem and
    /// classifies lines as markdown.
    pub fn new() -> Self {
        Self::with_parts(FsReader, MarkdownElementFactory)
    }

    /// Creates an empty document using `reader` for [`Document::parse_file`].
    pub fn with_reader(reader: impl FileReader + 'static) -> Self {
        Self::with_parts(reader, MarkdownElementFactory)
    }

    pub fn with_parts(
        reader: impl FileReader + 'static,
        factory: impl ElementFactory + 'static,
    ) -> Self {
        Self {
            elements: Vec::new(),
            cursor: None,
            reader: Box::new(reader),
            factory: Box::new(factory),
        }
    }

    /// Parses `content`, replacing any previously parsed elements.
    ///
    /// Never fails; the `Result` mirrors [`Document::parse_file`].
    ///
    /// The cursor is left where it was. After re-parsing into a shorter
    /// sequence it may sit past the end, in which case `current` returns
    /// `None` and `advance` returns false until [`Document::reset`].
    pub fn parse_str(&mut self, content: &str) -> Result<(), DocumentError> {
        let lines = normalize(content);
        self.elements = self.build_elements(&lines);
        log::debug!("parsed {} elements", self.elements.len());
        Ok(())
    }

    /// Reads `path` through the document's [`FileReader`] and parses it.
    ///
    /// A read failure is returned unchanged and leaves the previously parsed
    /// elements in place. Invalid UTF-8 is decoded lossily.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let bytes = self
            .reader
            .read(path)
            .inspect_err(|e| log::warn!("failed to read {}: {e}", path.display()))?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        self.parse_str(&String::from_utf8_lossy(&bytes))
    }

    fn build_elements(&self, lines: &[String]) -> Vec<Element> {
        let mut elements = Vec::with_capacity(lines.len());
        let mut iterator = LineIterator::new(lines);
        while iterator.advance() {
            if let Some(line) = iterator.current() {
                elements.push(self.factory.build(line));
            }
        }
        elements
    }

    /// Number of elements from the last successful parse.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Moves the cursor forward, returning true while it points at an element.
    ///
    /// Once past the end the cursor stays put and every call returns false.
    pub fn advance(&mut self) -> bool {
        let next = match self.cursor {
            None => 0,
            Some(pos) if pos >= self.elements.len() => return false,
            Some(pos) => pos + 1,
        };
        self.cursor = Some(next);
        next < self.elements.len()
    }

    /// The element under the cursor, or `None` before the first `advance` and
    /// after the last.
    pub fn current(&self) -> Option<&Element> {
        self.cursor.and_then(|pos| self.elements.get(pos))
    }

    /// Moves the cursor back before the first element.
    pub fn reset(&mut self) {
        self.cursor = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.elements)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
