pub mod cache;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod lookup;
pub mod preprocess;

pub use cache::CacheStats;
pub use dictionary::{DictionaryProvider, ProviderError};
pub use error::LookupError;
pub use format::{format_meanings, format_word_summary};
pub use lookup::{DictionaryClient, LookupResult, Meanings};
pub use preprocess::normalize_word;

/// Crate version, `major.minor.patch`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
