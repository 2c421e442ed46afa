use crate::error::SpeechError;

/// A single-use speech engine
pub trait SpeechEngine: Send {
    /// Words per minute
    fn set_rate(&mut self, rate: u32);

    /// 0.0 to 1.0
    fn set_volume(&mut self, volume: f32);

    /// Queue an utterance
    fn say(&mut self, text: &str);

    /// Speak everything queued, blocking until done
    fn run_and_wait(&mut self) -> Result<(), SpeechError>;

    /// Release the engine
    fn stop(&mut self);
}

/// Creates one engine per utterance
pub trait EngineFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError>;
}
