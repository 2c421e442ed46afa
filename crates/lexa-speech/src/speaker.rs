use std::fmt;
use std::sync::Arc;

use lexa_config::speech::SpeechConfig;

use crate::engine::EngineFactory;
use crate::error::SpeechError;
use crate::espeak::EspeakFactory;

pub const DEFAULT_RATE: u32 = 175;
pub const DEFAULT_VOLUME: f32 = 0.9;

/// Speaks text with per-call overrides on top of fixed defaults
#[derive(Clone)]
pub struct Speaker {
    factory: Arc<dyn EngineFactory>,
    rate: u32,
    volume: f32,
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("rate", &self.rate)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl Speaker {
    pub fn new(factory: Arc<dyn EngineFactory>) -> Self {
        Self::with_defaults(factory, DEFAULT_RATE, DEFAULT_VOLUME)
    }

    pub fn with_defaults(factory: Arc<dyn EngineFactory>, rate: u32, volume: f32) -> Self {
        Self {
            factory,
            rate,
            volume,
        }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::with_defaults(
            Arc::new(EspeakFactory::new(config.executable.clone())),
            config.rate,
            config.volume,
        )
    }

    /// Speak `text`, blocking until done. Blank text is ignored.
    pub fn speak(&self, text: &str, rate: Option<u32>, volume: Option<f32>) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let mut engine = self.factory.create()?;
        engine.set_rate(self.rate);
        engine.set_volume(self.volume);
        if let Some(rate) = rate {
            engine.set_rate(rate);
        }
        if let Some(volume) = volume {
            engine.set_volume(volume);
        }

        engine.say(text);
        let result = engine.run_and_wait();
        engine.stop();

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::engine::SpeechEngine;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Rate(u32),
        Volume(f32),
        Say(String),
        Run,
        Stop,
    }

    struct RecordingEngine {
        calls: Arc<Mutex<Vec<Call>>>,
        fail: bool,
    }

    impl SpeechEngine for RecordingEngine {
        fn set_rate(&mut self, rate: u32) {
            self.calls.lock().unwrap().push(Call::Rate(rate));
        }

        fn set_volume(&mut self, volume: f32) {
            self.calls.lock().unwrap().push(Call::Volume(volume));
        }

        fn say(&mut self, text: &str) {
            self.calls.lock().unwrap().push(Call::Say(text.to_string()));
        }

        fn run_and_wait(&mut self) -> Result<(), SpeechError> {
            self.calls.lock().unwrap().push(Call::Run);
            if self.fail {
                return Err(SpeechError::SynthesisFailed("no audio device".into()));
            }
            Ok(())
        }

        fn stop(&mut self) {
            self.calls.lock().unwrap().push(Call::Stop);
        }
    }

    #[derive(Default)]
    struct RecordingFactory {
        calls: Arc<Mutex<Vec<Call>>>,
        created: AtomicUsize,
        fail: bool,
    }

    impl EngineFactory for RecordingFactory {
        fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(RecordingEngine {
                calls: self.calls.clone(),
                fail: self.fail,
            }))
        }
    }

    fn speaker(factory: RecordingFactory) -> (Arc<RecordingFactory>, Speaker) {
        let factory = Arc::new(factory);
        (factory.clone(), Speaker::new(factory))
    }

    #[test]
    fn defaults_then_say_then_release() {
        let (factory, speaker) = speaker(RecordingFactory::default());

        speaker.speak("hello", None, None).unwrap();

        assert_eq!(
            *factory.calls.lock().unwrap(),
            vec![
                Call::Rate(175),
                Call::Volume(0.9),
                Call::Say("hello".into()),
                Call::Run,
                Call::Stop,
            ]
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let (factory, speaker) = speaker(RecordingFactory::default());

        speaker.speak("hello", Some(200), Some(0.5)).unwrap();

        let calls = factory.calls.lock().unwrap();
        assert_eq!(calls[2], Call::Rate(200));
        assert_eq!(calls[3], Call::Volume(0.5));
    }

    #[test]
    fn blank_text_is_a_no_op() {
        let (factory, speaker) = speaker(RecordingFactory::default());

        speaker.speak("", None, None).unwrap();
        speaker.speak("  \n ", None, None).unwrap();

        assert_eq!(factory.created.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn every_call_gets_a_fresh_engine() {
        let (factory, speaker) = speaker(RecordingFactory::default());

        speaker.speak("one", None, None).unwrap();
        speaker.speak("two", None, None).unwrap();

        assert_eq!(factory.created.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn engine_failure_propagates_after_release() {
        let (factory, speaker) = speaker(RecordingFactory {
            fail: true,
            ..Default::default()
        });

        let result = speaker.speak("hello", None, None);

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
        assert_eq!(factory.calls.lock().unwrap().last(), Some(&Call::Stop));
    }
}
