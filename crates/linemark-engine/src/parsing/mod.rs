pub(crate) mod lines;
pub mod normalize;

pub(crate) use lines::LineIterator;
pub use normalize::{LineEnding, normalize};
