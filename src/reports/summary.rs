use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::catalog::WordCatalog;
use crate::entry::WordEntry;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything derivable from a catalog at one point in time.
///
/// Export only: nothing rebuilds a catalog from a report.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    /// `sha256:<hex>` over the entries; equal catalogs give equal fingerprints.
    pub fingerprint: String,
    pub generated_at: DateTime<Utc>, // informational only
    pub capacity: usize,
    pub size: usize,
    pub entries: Vec<WordEntry>,
    pub length_histogram: Vec<usize>,
    pub repeated_letters: Vec<String>,
    pub alternating_case: Vec<String>,
}

impl CatalogReport {
    pub fn from_catalog(catalog: &WordCatalog) -> Self {
        Self {
            fingerprint: fingerprint(catalog.entries()),
            generated_at: Utc::now(),
            capacity: catalog.capacity(),
            size: catalog.size(),
            entries: catalog.entries().to_vec(),
            length_histogram: catalog.length_histogram(),
            repeated_letters: catalog.words_with_repeated_letters(),
            alternating_case: catalog.capitalize_alternating(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Content hash of `word:frequency` lines in catalog order.
pub fn fingerprint(entries: &[WordEntry]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        let line = format!("{}:{}\n", entry.text(), entry.frequency());
        hasher.update(line.as_bytes());
    }

    let hash = hasher.finalize();
    format!("sha256:{}", hex::encode(hash))
}
