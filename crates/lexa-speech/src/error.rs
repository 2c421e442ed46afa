//! Speech errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    /// Synthesizer could not be started
    #[error("Speech engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Synthesizer ran but did not finish cleanly
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
