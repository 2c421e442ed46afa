use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::speech::SpeechConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod speech;
pub mod ui;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub speech: SpeechConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_source<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = var("LEXA_DICTIONARY_URL").filter(|v| !v.trim().is_empty()) {
            config.dictionary.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse(&var, "LEXA_HTTP_TIMEOUT_SECS").filter(|v| *v > 0) {
            config.dictionary.timeout_secs = secs;
        }
        if let Some(capacity) = parse(&var, "LEXA_CACHE_CAPACITY").filter(|v| *v > 0) {
            config.dictionary.cache_capacity = capacity;
        }

        if let Some(executable) = var("LEXA_SPEECH_EXECUTABLE").filter(|v| !v.trim().is_empty()) {
            config.speech.executable = executable.trim().to_string();
        }
        if let Some(rate) = parse(&var, "LEXA_SPEECH_RATE").filter(|v| *v > 0) {
            config.speech.rate = rate;
        }
        if let Some(volume) = parse::<f32, _>(&var, "LEXA_SPEECH_VOLUME").filter(|v| v.is_finite()) {
            config.speech.volume = volume.clamp(0.0, 1.0);
        }

        if let Some(interval) = parse(&var, "LEXA_POLL_INTERVAL_MS").filter(|v| *v > 0) {
            config.ui.poll_interval_ms = interval;
        }

        config
    }
}

fn parse<T, F>(var: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(key).and_then(|v| v.trim().parse().ok())
}
