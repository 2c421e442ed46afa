use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::cache::{CacheStats, LookupCache};
use crate::dictionary::{DictionaryProvider, ProviderError, sanitize_meanings, sanitize_terms};
use crate::error::LookupError;
use crate::format::format_word_summary;
use crate::preprocess::normalize_word;

/// Part of speech -> definitions, iterated in key order
pub type Meanings = BTreeMap<String, Vec<String>>;

/// Everything known about one word. Empty collections mean nothing was found
/// or the backend failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub meanings: Meanings,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty() && self.synonyms.is_empty() && self.antonyms.is_empty()
    }

    pub fn into_parts(self) -> (Meanings, Vec<String>, Vec<String>) {
        (self.meanings, self.synonyms, self.antonyms)
    }

    /// Render the full text block shown to the user
    pub fn summary(&self, word: &str) -> String {
        format_word_summary(word, &self.meanings, &self.synonyms, &self.antonyms)
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Meanings,
    Synonyms,
    Antonyms,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Meanings => "meanings",
            Operation::Synonyms => "synonyms",
            Operation::Antonyms => "antonyms",
        };
        f.write_str(name)
    }
}

/// Caching, failure-suppressing front of a dictionary provider
pub struct DictionaryClient {
    provider: Arc<dyn DictionaryProvider>,
    meanings: LookupCache<Meanings>,
    synonyms: LookupCache<Vec<String>>,
    antonyms: LookupCache<Vec<String>>,
}

impl fmt::Debug for DictionaryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryClient")
            .field("provider", &self.provider.name())
            .field("meanings", &self.meanings)
            .field("synonyms", &self.synonyms)
            .field("antonyms", &self.antonyms)
            .finish()
    }
}

impl DictionaryClient {
    /// Each of the three caches holds up to `capacity` words
    pub fn new(provider: Arc<dyn DictionaryProvider>, capacity: u64) -> Result<Self, LookupError> {
        if capacity == 0 {
            return Err(LookupError::InvalidCapacity);
        }

        tracing::debug!(provider = provider.name(), capacity, "Dictionary client ready");

        Ok(Self {
            provider,
            meanings: LookupCache::new(capacity),
            synonyms: LookupCache::new(capacity),
            antonyms: LookupCache::new(capacity),
        })
    }

    pub async fn meanings(&self, word: &str) -> Meanings {
        self.resolve(&self.meanings, Operation::Meanings, word, sanitize_meanings)
            .await
    }

    pub async fn synonyms(&self, word: &str) -> Vec<String> {
        self.resolve(&self.synonyms, Operation::Synonyms, word, sanitize_terms)
            .await
    }

    pub async fn antonyms(&self, word: &str) -> Vec<String> {
        self.resolve(&self.antonyms, Operation::Antonyms, word, sanitize_terms)
            .await
    }

    /// All three sub-lookups, each failing independently
    pub async fn lookup(&self, word: &str) -> LookupResult {
        let (meanings, synonyms, antonyms) = tokio::join!(
            self.meanings(word),
            self.synonyms(word),
            self.antonyms(word)
        );

        let stats = self.cache_stats();
        tracing::debug!(
            hits = stats.hits,
            misses = stats.misses,
            entries = stats.entries,
            "Lookup cache"
        );

        LookupResult {
            meanings,
            synonyms,
            antonyms,
        }
    }

    /// Combined counters of the three per-operation caches
    pub fn cache_stats(&self) -> CacheStats {
        self.meanings.stats() + self.synonyms.stats() + self.antonyms.stats()
    }

    async fn resolve<V>(
        &self,
        cache: &LookupCache<V>,
        operation: Operation,
        word: &str,
        sanitize: fn(Option<Value>) -> V,
    ) -> V
    where
        V: Clone + Default + Send + Sync + 'static,
    {
        let key = normalize_word(word);
        if key.is_empty() {
            return V::default();
        }

        if let Some(hit) = cache.get(&key) {
            tracing::debug!(word = %key, %operation, "Cache hit");
            return hit;
        }

        match self.fetch(operation, &key).await {
            Ok(raw) => {
                let value = sanitize(raw);
                cache.insert(key, value.clone());
                value
            }
            Err(e) => {
                // Not cached, a later lookup may succeed
                tracing::warn!(word = %key, %operation, "Lookup failed: {}", e);
                V::default()
            }
        }
    }

    async fn fetch(&self, operation: Operation, word: &str) -> Result<Option<Value>, ProviderError> {
        match operation {
            Operation::Meanings => self.provider.meaning(word).await,
            Operation::Synonyms => self.provider.synonym(word).await,
            Operation::Antonyms => self.provider.antonym(word).await,
        }
    }
}
