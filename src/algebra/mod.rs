//! Reduced words in free groups and their rendering

mod format;
mod word;

pub use format::OutputFormat;
pub use word::{Factor, Word, IDENTITY, X, Y};
