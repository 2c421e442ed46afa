/// Prefix of every message produced by a failed lookup worker
pub const ERROR_MARKER: &str = "An error occurred while looking up the word:";

/// Any text containing this, in any case, is never read aloud
const UNSPEAKABLE_PHRASE: &str = "error occurred";

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// UI asks the app to look a word up
    Lookup(LookupRequest),
    /// UI asks the app to read text aloud
    Speak(String),
    /// App hands a finished lookup back to the UI
    LookupFinished(LookupOutcome),
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Shell generation the request was issued under
    pub generation: u64,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub generation: u64,
    pub word: String,
    pub reply: LookupReply,
}

impl LookupOutcome {
    pub fn new(request: LookupRequest, reply: LookupReply) -> Self {
        Self {
            generation: request.generation,
            word: request.word,
            reply,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupReply {
    /// At least one of meanings/synonyms/antonyms came back
    Found(String),
    /// Nothing came back, the summary still carries the not-found block
    Empty(String),
    /// The worker itself failed
    Failed(String),
}

impl LookupReply {
    /// Build a failure reply with the standard error prefix
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed(format!("{ERROR_MARKER}\n{reason}"))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Found(text) | Self::Empty(text) | Self::Failed(text) => text,
        }
    }

    /// Whether the rendered text may be handed to the speech engine
    pub fn is_speakable(&self) -> bool {
        match self {
            Self::Failed(_) => false,
            Self::Found(text) | Self::Empty(text) => {
                !text.trim().is_empty() && !text.to_lowercase().contains(UNSPEAKABLE_PHRASE)
            }
        }
    }
}
