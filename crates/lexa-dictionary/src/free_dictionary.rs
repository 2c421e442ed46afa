//! Free Dictionary API provider
//!
//! `GET {api_url}/{word}` returns a list of entries, each with meanings
//! grouped by part of speech. A 404 means the word is unknown.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lexa_config::dictionary::DictionaryConfig;
use lexa_core::{DictionaryProvider, LookupError, ProviderError};
use moka::future::Cache;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Response reuse window so the three sub-lookups of a word share one request
const RESPONSE_TTL: Duration = Duration::from_secs(60);
const RESPONSE_CAPACITY: u64 = 64;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiEntry {
    #[serde(default, deserialize_with = "lenient_list")]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default, deserialize_with = "lenient_list")]
    definitions: Vec<ApiDefinition>,
    #[serde(default, deserialize_with = "lenient_list")]
    synonyms: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    antonyms: Vec<Value>,
}

/// Leaf values stay raw, the client drops non-strings one by one
#[derive(Debug, Clone, Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: Value,
    #[serde(default, deserialize_with = "lenient_list")]
    synonyms: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    antonyms: Vec<Value>,
}

/// Keep the items that have the expected shape, skip the rest.
/// Anything but an array is treated as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_items(value))
}

fn lenient_items<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

type Entries = Arc<Option<Vec<ApiEntry>>>;

#[derive(Debug)]
pub struct FreeDictionaryProvider {
    client: Client,
    base_url: Url,
    responses: Cache<String, Entries>,
}

impl FreeDictionaryProvider {
    /// Fails when the HTTP client cannot be built or the URL is unusable
    pub fn new(config: &DictionaryConfig) -> Result<Self, LookupError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| LookupError::Unavailable(format!("invalid dictionary URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::Unavailable(format!(
                "dictionary URL cannot take a path: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("lexa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        let responses = Cache::builder()
            .max_capacity(RESPONSE_CAPACITY)
            .time_to_live(RESPONSE_TTL)
            .build();

        Ok(Self {
            client,
            base_url,
            responses,
        })
    }

    fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }

    async fn entries(&self, word: &str) -> Result<Entries, ProviderError> {
        self.responses
            .try_get_with(word.to_string(), self.fetch(word))
            .await
            .map_err(|e| (*e).clone())
    }

    async fn fetch(&self, word: &str) -> Result<Entries, ProviderError> {
        let url = self.entry_url(word);
        tracing::debug!(%url, "Fetching dictionary entry");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Network("request timed out".to_string())
            } else {
                ProviderError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(word, "Word not in dictionary");
            return Ok(Arc::new(None));
        }
        if !status.is_success() {
            return Err(ProviderError::Api(format!("HTTP {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse response: {e}")))?;
        if !body.is_array() {
            return Err(ProviderError::Parse("expected a list of entries".to_string()));
        }
        let entries: Vec<ApiEntry> = lenient_items(body);

        Ok(Arc::new(Some(entries)))
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryProvider {
    async fn meaning(&self, word: &str) -> Result<Option<Value>, ProviderError> {
        let entries = self.entries(word).await?;
        Ok(entries.as_deref().map(meanings_value))
    }

    async fn synonym(&self, word: &str) -> Result<Option<Value>, ProviderError> {
        let entries = self.entries(word).await?;
        Ok(entries
            .as_deref()
            .map(|e| terms_value(e, |m| &m.synonyms, |d| &d.synonyms)))
    }

    async fn antonym(&self, word: &str) -> Result<Option<Value>, ProviderError> {
        let entries = self.entries(word).await?;
        Ok(entries
            .as_deref()
            .map(|e| terms_value(e, |m| &m.antonyms, |d| &d.antonyms)))
    }

    fn name(&self) -> &str {
        "free-dictionary"
    }
}

/// `{ "Noun": [..], "Verb": [..] }`, parts of speech merged across entries
pub(crate) fn meanings_value(entries: &[ApiEntry]) -> Value {
    let mut map = Map::new();

    for meaning in entries.iter().flat_map(|e| &e.meanings) {
        let defs = map
            .entry(capitalize(&meaning.part_of_speech))
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(defs) = defs {
            defs.extend(
                meaning
                    .definitions
                    .iter()
                    .map(|d| d.definition.clone()),
            );
        }
    }

    Value::Object(map)
}

fn terms_value(
    entries: &[ApiEntry],
    on_meaning: fn(&ApiMeaning) -> &Vec<Value>,
    on_definition: fn(&ApiDefinition) -> &Vec<Value>,
) -> Value {
    let terms = entries
        .iter()
        .flat_map(|e| &e.meanings)
        .flat_map(|m| {
            on_meaning(m)
                .iter()
                .chain(m.definitions.iter().flat_map(on_definition))
        })
        .cloned()
        .collect();

    Value::Array(terms)
}

fn capitalize(pos: &str) -> String {
    let pos = pos.trim();
    let mut chars = pos.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
