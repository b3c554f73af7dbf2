//! Fixed-capacity word frequency catalog.
//!
//! `word-catalog` keeps the distinct words of a text in case-insensitive
//! alphabetical order together with how often each was seen, and derives
//! reports from that table: a length histogram, words with repeated
//! letters, an alternating-case transform, low-frequency pruning and a
//! columnar listing.

pub mod catalog;
pub mod entry;
pub mod reports;
pub mod tokenize;

pub use catalog::{CatalogConfig, ConfigError, WordCatalog};
pub use entry::WordEntry;
pub use reports::{CatalogReport, ReportError};
pub use tokenize::{LineSource, SeparatorTokenizer, SourceError, Tokenizer};
