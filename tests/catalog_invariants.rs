use std::cmp::Ordering;

use proptest::prelude::*;
use word_catalog::catalog::cmp_ignore_ascii_case;
use word_catalog::{WordCatalog, WordEntry};

fn assert_sorted_unique(catalog: &WordCatalog) -> Result<(), TestCaseError> {
    for pair in catalog.entries().windows(2) {
        prop_assert_eq!(
            cmp_ignore_ascii_case(pair[0].text(), pair[1].text()),
            Ordering::Less,
            "{} must sort strictly before {}",
            pair[0].text(),
            pair[1].text()
        );
    }
    Ok(())
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,6}"
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..8).prop_map(|words| words.join(" , "))
}

proptest! {
    /// Sorted and duplicate-free after every ingestion.
    #[test]
    fn prop_sorted_and_unique(lines in prop::collection::vec(line(), 0..10), capacity in 0usize..20) {
        let mut catalog = WordCatalog::new(capacity);
        for line in &lines {
            catalog.add_words(line);
            assert_sorted_unique(&catalog)?;
            prop_assert!(catalog.size() <= capacity);
        }
    }

    /// Frequencies add up to the number of tokens that were not dropped.
    #[test]
    fn prop_unbounded_catalog_counts_every_token(words in prop::collection::vec(word(), 0..40)) {
        let mut catalog = WordCatalog::new(words.len());
        catalog.add_tokens(&words);

        let total: u32 = catalog.iter().map(WordEntry::frequency).sum();
        prop_assert_eq!(total as usize, words.len());
        for w in &words {
            prop_assert!(catalog.index_of(w).is_some());
        }
    }

    /// Pruning removes exactly the rare entries and keeps survivor order.
    #[test]
    fn prop_prune_exact(words in prop::collection::vec("[a-e]{1,2}", 0..40), threshold in 0u32..5) {
        let mut catalog = WordCatalog::new(64);
        catalog.add_tokens(&words);

        let before: Vec<WordEntry> = catalog.entries().to_vec();
        let removed = catalog.prune_below_frequency(threshold);

        let expected: Vec<WordEntry> = before
            .iter()
            .filter(|e| e.frequency() >= threshold)
            .cloned()
            .collect();
        prop_assert_eq!(removed, before.len() - expected.len());
        prop_assert_eq!(catalog.entries(), expected.as_slice());
        assert_sorted_unique(&catalog)?;
    }

    /// Histogram always accounts for every entry.
    #[test]
    fn prop_histogram_total(words in prop::collection::vec("[a-z]{1,30}", 0..30)) {
        let mut catalog = WordCatalog::new(30);
        catalog.add_tokens(&words);

        let histogram = catalog.length_histogram();
        prop_assert_eq!(histogram.len(), 15);
        prop_assert_eq!(histogram.iter().sum::<usize>(), catalog.size());
    }
}

#[test]
fn invariant_capacity_never_exceeded() {
    let mut catalog = WordCatalog::new(5);
    for i in 0..50 {
        catalog.add_words(&format!("word{i:02}"));
        assert!(catalog.size() <= 5);
    }
    let words: Vec<&str> = catalog.iter().map(WordEntry::text).collect();
    assert_eq!(words, vec!["word00", "word01", "word02", "word03", "word04"]);
}
