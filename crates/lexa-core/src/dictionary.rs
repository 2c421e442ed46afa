use std::collections::BTreeSet;

use serde_json::Value;

use crate::lookup::Meanings;

/// Raw dictionary backend
///
/// Each call returns whatever the backend produced, `None` when it answered
/// with nothing. Values are untrusted and get sanitized by the client.
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Part of speech -> definitions
    async fn meaning(&self, word: &str) -> Result<Option<Value>, ProviderError>;

    /// Flat list of synonyms
    async fn synonym(&self, word: &str) -> Result<Option<Value>, ProviderError>;

    /// Flat list of antonyms
    async fn antonym(&self, word: &str) -> Result<Option<Value>, ProviderError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Keep only arrays of non-blank strings, keyed by part of speech
pub fn sanitize_meanings(raw: Option<Value>) -> Meanings {
    let Some(Value::Object(map)) = raw else {
        return Meanings::new();
    };

    map.into_iter()
        .filter_map(|(pos, defs)| match defs {
            Value::Array(items) => {
                let defs: Vec<String> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(text) if !text.trim().is_empty() => Some(text),
                        _ => None,
                    })
                    .collect();
                Some((pos, defs))
            }
            _ => None,
        })
        .collect()
}

/// Trimmed, deduplicated and sorted terms
pub fn sanitize_terms(raw: Option<Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
