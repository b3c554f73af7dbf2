use std::ops::RangeInclusive;

use crate::entry::WordEntry;

/// Char positions rendered lowercase; every other position is uppercase.
const LOWER_WINDOW: RangeInclusive<usize> = 3..=5;

/// Uppercases `word` except for char positions 3, 4 and 5.
///
/// Words shorter than four chars come out fully uppercase. Only ASCII
/// letters change case.
pub fn alternate_case(word: &str) -> String {
    word.chars()
        .enumerate()
        .map(|(position, c)| {
            if LOWER_WINDOW.contains(&position) {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// One transformed string per cataloged word, in catalog order.
#[tracing::instrument(skip_all)]
pub fn capitalize_alternating(entries: &[WordEntry]) -> Vec<String> {
    entries.iter().map(|entry| alternate_case(entry.text())).collect()
}
