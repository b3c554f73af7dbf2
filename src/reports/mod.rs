pub mod capitalize;
pub mod histogram;
pub mod render;
pub mod repeated;
pub mod summary;

pub use capitalize::{alternate_case, capitalize_alternating};
pub use histogram::length_histogram;
pub use render::{render, write_listing};
pub use repeated::{has_repeated_letters, words_with_repeated_letters};
pub use summary::{fingerprint, CatalogReport, ReportError};
