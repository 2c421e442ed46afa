use lexa_speech::Speaker;
use tokio::task::JoinHandle;

/// Speak on the blocking pool; nothing waits for the result
pub fn handle_speak(speaker: Speaker, text: String) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = speaker.speak(&text, None, None) {
            tracing::error!("Speech failed: {}", e);
        }
    })
}
