use std::fmt;

use serde::Serialize;

/// One cataloged word and how many times it has been seen.
///
/// The text is fixed at creation (case preserved as first encountered).
/// Only the owning catalog bumps the frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    text: String,
    frequency: u32,
}

impl WordEntry {
    /// A freshly seen word starts at frequency 1.
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            frequency: 1,
        }
    }

    pub(crate) fn increment(&mut self) {
        self.frequency = self.frequency.saturating_add(1);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Goes through `pad` so callers can align with `{:>5}`.
        f.pad(&format!("{}({})", self.text, self.frequency))
    }
}
