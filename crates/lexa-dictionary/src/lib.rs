use std::sync::Arc;

use lexa_config::Config;
use lexa_config::dictionary::DictionaryConfig;
use lexa_core::{DictionaryClient, LookupError, Meanings};

pub mod free_dictionary;

pub use free_dictionary::FreeDictionaryProvider;

/// Lookup client backed by the Free Dictionary API
pub fn build_client(config: &DictionaryConfig) -> Result<DictionaryClient, LookupError> {
    let provider = FreeDictionaryProvider::new(config)?;
    DictionaryClient::new(Arc::new(provider), config.cache_capacity)
}

/// One-off lookup with a freshly built client
pub async fn lookup_word(word: &str) -> Result<(Meanings, Vec<String>, Vec<String>), LookupError> {
    let config = Config::new();
    let client = build_client(&config.dictionary)?;
    Ok(client.lookup(word).await.into_parts())
}
