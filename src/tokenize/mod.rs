pub mod source;
pub mod splitter;

pub use source::{LineSource, SourceError};
pub use splitter::{SeparatorTokenizer, Tokenizer};
