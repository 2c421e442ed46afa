use serde::{Deserialize, Serialize};

fn default_executable() -> String {
    "espeak-ng".to_string()
}

fn default_rate() -> u32 {
    175
}

fn default_volume() -> f32 {
    0.9
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    /// Synthesizer binary, resolved through PATH
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Words per minute
    #[serde(default = "default_rate")]
    pub rate: u32,
    /// 0.0 to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            rate: default_rate(),
            volume: default_volume(),
        }
    }
}
