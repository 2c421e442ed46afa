use lexa_config::Config;
use lexa_core::DictionaryClient;
use lexa_speech::Speaker;

pub struct AppState {
    pub config: Config,
    pub dictionary: DictionaryClient,
    pub speaker: Speaker,
}

impl AppState {
    pub fn new(config: Config, dictionary: DictionaryClient, speaker: Speaker) -> Self {
        Self {
            config,
            dictionary,
            speaker,
        }
    }
}
