//! Offline text-to-speech
//!
//! A fresh engine is created for every utterance. Speaking blocks the caller
//! until playback ends, so run it off the UI thread.

pub mod engine;
pub mod error;
pub mod espeak;
pub mod speaker;

pub use engine::{EngineFactory, SpeechEngine};
pub use error::SpeechError;
pub use espeak::{EspeakEngine, EspeakFactory};
pub use speaker::Speaker;

use lexa_config::Config;

/// Speak with the configured engine and defaults
pub fn speak_text(text: &str, rate: Option<u32>, volume: Option<f32>) -> Result<(), SpeechError> {
    let config = Config::new();
    Speaker::from_config(&config.speech).speak(text, rate, volume)
}
