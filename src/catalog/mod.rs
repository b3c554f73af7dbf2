pub mod catalog;
pub mod config;
pub mod ordering;

pub use catalog::WordCatalog;
pub use config::{CatalogConfig, ConfigError};
pub use ordering::{cmp_ignore_ascii_case, eq_ignore_ascii_case};
