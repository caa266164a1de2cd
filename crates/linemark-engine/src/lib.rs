pub mod document;
pub mod elements;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Document, DocumentError};
pub use elements::{
    Element, ElementFactory, ElementKind, FenceKind, MarkdownElementFactory, Marker,
};
pub use io::{FileReader, FsReader};
pub use parsing::{LineEnding, normalize};
