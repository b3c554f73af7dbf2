use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Histogram must have at least one bin")]
    NoHistogramBins,
    #[error("Rendering needs at least one entry per line")]
    NoColumns,
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of distinct words held.
    pub capacity: usize,
    /// Number of length buckets; longer words land in the last one.
    pub histogram_bins: usize,
    /// Entries per rendered line.
    pub columns: usize,
    /// Minimum width each rendered `word(frequency)` is right-aligned to.
    pub field_width: usize,
}

impl CatalogConfig {
    pub fn v0(capacity: usize) -> Self {
        Self {
            capacity,
            histogram_bins: 15,
            columns: 5,
            field_width: 5,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bins == 0 {
            return Err(ConfigError::NoHistogramBins);
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(())
    }
}
