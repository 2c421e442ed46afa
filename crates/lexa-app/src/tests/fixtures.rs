use std::sync::Arc;

use kanal::Sender;
use lexa_config::Config;
use lexa_core::{DictionaryClient, DictionaryProvider, ProviderError};
use lexa_speech::{EngineFactory, Speaker, SpeechEngine, SpeechError};
use serde_json::{Value, json};

use crate::state::AppState;

/// Provider with a single known word, or one that panics on every call
pub struct StubProvider {
    pub panic: bool,
}

#[async_trait::async_trait]
impl DictionaryProvider for StubProvider {
    async fn meaning(&self, word: &str) -> Result<Option<Value>, ProviderError> {
        if self.panic {
            panic!("backend exploded");
        }
        Ok((word == "test").then(|| json!({ "Noun": ["first meaning"] })))
    }

    async fn synonym(&self, word: &str) -> Result<Option<Value>, ProviderError> {
        if self.panic {
            panic!("backend exploded");
        }
        Ok((word == "test").then(|| json!(["term2", "term1", "term1"])))
    }

    async fn antonym(&self, word: &str) -> Result<Option<Value>, ProviderError> {
        if self.panic {
            panic!("backend exploded");
        }
        Ok((word == "test").then(|| json!(["opposite"])))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Reports every spoken text on a channel
pub struct ChannelEngine {
    spoken: Sender<String>,
    queue: Vec<String>,
}

impl SpeechEngine for ChannelEngine {
    fn set_rate(&mut self, _rate: u32) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn say(&mut self, text: &str) {
        self.queue.push(text.to_string());
    }

    fn run_and_wait(&mut self) -> Result<(), SpeechError> {
        for text in self.queue.drain(..) {
            self.spoken
                .send(text)
                .map_err(|e| SpeechError::SynthesisFailed(e.to_string()))?;
        }
        Ok(())
    }

    fn stop(&mut self) {}
}

pub struct ChannelFactory {
    pub spoken: Sender<String>,
}

impl EngineFactory for ChannelFactory {
    fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError> {
        Ok(Box::new(ChannelEngine {
            spoken: self.spoken.clone(),
            queue: Vec::new(),
        }))
    }
}

pub fn app_state(provider: StubProvider, spoken: Sender<String>) -> Arc<AppState> {
    let dictionary = DictionaryClient::new(Arc::new(provider), 8).expect("client");
    let speaker = Speaker::new(Arc::new(ChannelFactory { spoken }));
    Arc::new(AppState::new(Config::default(), dictionary, speaker))
}
