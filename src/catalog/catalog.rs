use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

use crate::catalog::config::{CatalogConfig, ConfigError};
use crate::catalog::ordering::{cmp_ignore_ascii_case, eq_ignore_ascii_case};
use crate::entry::WordEntry;
use crate::reports;
use crate::tokenize::{LineSource, SeparatorTokenizer, SourceError, Tokenizer};

/// Fixed-capacity catalog of distinct words, kept sorted case-insensitively.
///
/// After every public call:
/// - entries are ordered by [`cmp_ignore_ascii_case`] on their text
/// - no two entries are case-insensitively equal
/// - `size() <= capacity()`
///
/// Once full, unseen words are dropped; known words still count.
/// Single-threaded: callers that share a catalog must serialize writers.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    config: CatalogConfig,
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    /// Catalog with the reference layout (15 histogram bins, 5 columns of width 5).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            config: CatalogConfig::v0(capacity),
        }
    }

    pub fn with_config(config: CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            entries: Vec::with_capacity(config.capacity),
            config,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.config.capacity
    }

    /// Position of `word`, compared ignoring ASCII case.
    ///
    /// Linear scan; catalogs are small and this is also the insertion gate.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| eq_ignore_ascii_case(entry.text(), word))
    }

    /// Entry at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    /// Splits `line` on runs of whitespace, `.` and `,` and ingests the words.
    pub fn add_words(&mut self, line: &str) {
        self.add_words_with(line, &SeparatorTokenizer);
    }

    pub fn add_words_with<T: Tokenizer>(&mut self, line: &str, tokenizer: &T) {
        self.add_tokens(tokenizer.tokenize(line));
    }

    /// Counts each token: known words are incremented, unseen words are
    /// inserted in order while there is room, and dropped otherwise.
    #[tracing::instrument(skip_all)]
    pub fn add_tokens<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let word = token.as_ref();
            if let Some(index) = self.index_of(word) {
                self.entries[index].increment();
            } else if !self.is_full() {
                self.insert_in_order(word);
            } else {
                tracing::debug!(word, capacity = self.config.capacity, "catalog full, dropping word");
            }
        }

        debug_assert!(self.is_sorted_and_unique());
    }

    /// Feeds every line through [`add_words`](Self::add_words).
    /// Returns the number of lines consumed.
    #[tracing::instrument(skip_all)]
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut consumed = 0;
        for line in lines {
            self.add_words(line.as_ref());
            consumed += 1;
        }
        tracing::debug!(lines = consumed, size = self.size(), "ingested lines");
        consumed
    }

    /// Reads `path` line by line into the catalog.
    ///
    /// Only failing to open the file is an error. A read failure part way
    /// through ends ingestion with whatever was read so far.
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) -> Result<usize, SourceError> {
        let source = LineSource::open(path)?;
        Ok(self.ingest_lines(source))
    }

    /// Places a new entry for `word` at its sorted position.
    ///
    /// No-op when the word is already present or the catalog is full.
    fn insert_in_order(&mut self, word: &str) {
        if self.index_of(word).is_some() || self.is_full() {
            return;
        }

        // Walk right to left past every entry that sorts after `word`.
        let mut slot = self.entries.len();
        while slot > 0 && cmp_ignore_ascii_case(self.entries[slot - 1].text(), word) == Ordering::Greater {
            slot -= 1;
        }

        // Shifts the tail one place to the right.
        self.entries.insert(slot, WordEntry::new(word));
    }

    /// Removes every entry with `frequency < threshold`, keeping the rest in order.
    /// Returns how many were removed.
    #[tracing::instrument(skip(self))]
    pub fn prune_below_frequency(&mut self, threshold: u32) -> usize {
        let mut removed = 0;
        for index in (0..self.entries.len()).rev() {
            if self.entries[index].frequency() < threshold {
                // Compacts the tail one place to the left.
                self.entries.remove(index);
                removed += 1;
            }
        }
        tracing::debug!(removed, remaining = self.size(), "pruned catalog");
        removed
    }

    pub fn length_histogram(&self) -> Vec<usize> {
        reports::length_histogram(&self.entries, self.config.histogram_bins)
    }

    pub fn words_with_repeated_letters(&self) -> Vec<String> {
        reports::words_with_repeated_letters(&self.entries)
    }

    pub fn capitalize_alternating(&self) -> Vec<String> {
        reports::capitalize_alternating(&self.entries)
    }

    /// Same text as `Display`, built in one preallocated buffer.
    pub fn render(&self) -> String {
        reports::render(&self.entries, self.config.columns, self.config.field_width)
    }

    fn is_sorted_and_unique(&self) -> bool {
        self.entries
            .windows(2)
            .all(|w| cmp_ignore_ascii_case(w[0].text(), w[1].text()) == Ordering::Less)
    }
}

impl fmt::Display for WordCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        reports::write_listing(f, &self.entries, self.config.columns, self.config.field_width)
    }
}

impl<'a> IntoIterator for &'a WordCatalog {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
