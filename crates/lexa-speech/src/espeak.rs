//! eSpeak NG engine
//!
//! Runs the `espeak-ng` CLI as a child process and feeds the text on stdin.
//! Audio goes straight to the default output device.

use std::io::{ErrorKind, Write};
use std::process::{Child, Command, Stdio};

use crate::engine::{EngineFactory, SpeechEngine};
use crate::error::SpeechError;

/// espeak-ng's own default speed
const DEFAULT_RATE: u32 = 175;
const DEFAULT_AMPLITUDE: u32 = 100;

#[derive(Debug)]
pub struct EspeakEngine {
    executable: String,
    rate: u32,
    amplitude: u32,
    queue: Vec<String>,
    child: Option<Child>,
}

impl EspeakEngine {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            rate: DEFAULT_RATE,
            amplitude: DEFAULT_AMPLITUDE,
            queue: Vec::new(),
            child: None,
        }
    }

    fn args(&self) -> Vec<String> {
        vec![
            "-s".to_string(),
            self.rate.to_string(),
            "-a".to_string(),
            self.amplitude.to_string(),
            "--stdin".to_string(),
        ]
    }

    fn spawn(&self) -> Result<Child, SpeechError> {
        Command::new(&self.executable)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    SpeechError::EngineUnavailable(format!("{} not found in PATH", self.executable))
                }
                _ => SpeechError::Io(e),
            })
    }
}

impl SpeechEngine for EspeakEngine {
    fn set_rate(&mut self, rate: u32) {
        self.rate = rate.max(1);
    }

    fn set_volume(&mut self, volume: f32) {
        // espeak amplitude 100 is normal volume
        self.amplitude = (volume.clamp(0.0, 1.0) * 100.0).round() as u32;
    }

    fn say(&mut self, text: &str) {
        self.queue.push(text.to_string());
    }

    fn run_and_wait(&mut self) -> Result<(), SpeechError> {
        if self.queue.is_empty() {
            return Ok(());
        }

        let text = self.queue.drain(..).collect::<Vec<_>>().join("\n");
        tracing::debug!(
            executable = %self.executable,
            rate = self.rate,
            amplitude = self.amplitude,
            "Speaking {} chars",
            text.len()
        );

        let spawned = self.spawn()?;
        let child = self.child.insert(spawned);

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
            // stdin is dropped here, closing it
        }

        let status = child.wait()?;
        self.child = None;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::SynthesisFailed(format!(
                "{} exited with {status}",
                self.executable
            )))
        }
    }

    fn stop(&mut self) {
        self.queue.clear();
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                tracing::debug!("Speech process already gone: {}", e);
            }
            let _ = child.wait();
        }
    }
}

impl Drop for EspeakEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Clone)]
pub struct EspeakFactory {
    executable: String,
}

impl EspeakFactory {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for EspeakFactory {
    fn default() -> Self {
        Self::new("espeak-ng")
    }
}

impl EngineFactory for EspeakFactory {
    fn create(&self) -> Result<Box<dyn SpeechEngine>, SpeechError> {
        Ok(Box::new(EspeakEngine::new(self.executable.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_maps_to_amplitude() {
        let mut engine = EspeakEngine::new("espeak-ng");
        engine.set_rate(200);
        engine.set_volume(0.9);

        assert_eq!(engine.args(), vec!["-s", "200", "-a", "90", "--stdin"]);
    }

    #[test]
    fn volume_is_clamped() {
        let mut engine = EspeakEngine::new("espeak-ng");
        engine.set_volume(4.0);
        assert_eq!(engine.amplitude, 100);
        engine.set_volume(-1.0);
        assert_eq!(engine.amplitude, 0);
    }

    #[test]
    fn nothing_queued_spawns_nothing() {
        let mut engine = EspeakEngine::new("lexa-no-such-synthesizer");
        assert!(engine.run_and_wait().is_ok());
    }

    #[test]
    fn missing_executable_is_unavailable() {
        let mut engine = EspeakEngine::new("lexa-no-such-synthesizer");
        engine.say("hello");

        let result = engine.run_and_wait();
        assert!(matches!(result, Err(SpeechError::EngineUnavailable(_))));
        engine.stop();
        assert!(engine.child.is_none());
    }
}
