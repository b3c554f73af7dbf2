pub mod word_entry;

pub use word_entry::WordEntry;
