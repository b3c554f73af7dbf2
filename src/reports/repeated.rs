use std::collections::HashSet;

use crate::entry::WordEntry;

/// True when some character occurs at least twice, ignoring ASCII case.
pub fn has_repeated_letters(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars()
        .map(|c| c.to_ascii_lowercase())
        .any(|c| !seen.insert(c))
}

/// Cataloged words with a repeated letter, in catalog order.
///
/// Two passes: count the matches, then collect into a vector sized exactly.
#[tracing::instrument(skip_all)]
pub fn words_with_repeated_letters(entries: &[WordEntry]) -> Vec<String> {
    let count = entries
        .iter()
        .filter(|entry| has_repeated_letters(entry.text()))
        .count();

    let mut words = Vec::with_capacity(count);
    words.extend(
        entries
            .iter()
            .filter(|entry| has_repeated_letters(entry.text()))
            .map(|entry| entry.text().to_string()),
    );
    debug_assert_eq!(words.len(), count);
    words
}
