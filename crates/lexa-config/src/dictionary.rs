use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_capacity() -> u64 {
    512
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL, the word is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Entries kept per lookup cache (meanings, synonyms, antonyms)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}
