use lexa_types::{LookupOutcome, LookupRequest};

pub const READY: &str = "Ready";
pub const LOOKING_UP: &str = "Looking up...";
pub const ENTER_A_WORD: &str = "Please enter a word.";
pub const NOTHING_TO_SPEAK: &str = "Nothing to speak.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyWord,
    /// A lookup is already in flight
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Rendered,
    /// Outcome belongs to a lookup that was cleared or superseded
    Stale,
}

/// Lookup lifecycle of the window, one word in flight at a time
///
/// Every submission and every clear starts a new generation; only the outcome
/// of the in-flight generation is rendered.
#[derive(Debug)]
pub struct Shell {
    generation: u64,
    in_flight: Option<u64>,
    input: String,
    output: String,
    status: String,
    can_speak: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            generation: 0,
            in_flight: None,
            input: String::new(),
            output: String::new(),
            status: READY.to_string(),
            can_speak: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.in_flight {
            Some(_) => Phase::Busy,
            None => Phase::Idle,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase() == Phase::Busy
    }

    /// Whether `generation` is the lookup the shell still waits for
    pub fn is_waiting_for(&self, generation: u64) -> bool {
        self.in_flight == Some(generation)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn can_speak(&self) -> bool {
        self.can_speak
    }

    /// Idle -> Busy for a non-blank word
    pub fn submit(&mut self, input: &str) -> Result<LookupRequest, SubmitError> {
        let word = input.trim();
        if word.is_empty() {
            self.status = ENTER_A_WORD.to_string();
            return Err(SubmitError::EmptyWord);
        }
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.input = word.to_string();
        self.output.clear();
        self.can_speak = false;
        self.status = LOOKING_UP.to_string();

        Ok(LookupRequest {
            generation: self.generation,
            word: self.input.clone(),
        })
    }

    /// Busy -> Idle when the outcome matches the in-flight lookup
    pub fn accept(&mut self, outcome: LookupOutcome) -> Delivery {
        if !self.is_waiting_for(outcome.generation) {
            return Delivery::Stale;
        }

        self.in_flight = None;
        self.can_speak = outcome.reply.is_speakable();
        self.output = outcome.reply.text().to_string();
        self.status = READY.to_string();

        Delivery::Rendered
    }

    /// Back to a fresh Idle, abandoning any in-flight lookup
    pub fn clear(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.input.clear();
        self.output.clear();
        self.can_speak = false;
        self.status = READY.to_string();
    }

    /// Displayed text, if there is any to read aloud
    pub fn speakable_text(&mut self) -> Option<String> {
        let text = self.output.trim();
        if text.is_empty() {
            self.status = NOTHING_TO_SPEAK.to_string();
            return None;
        }
        Some(text.to_string())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lexa_types::LookupReply;

    use super::*;

    fn found(request: &LookupRequest, text: &str) -> LookupOutcome {
        LookupOutcome::new(request.clone(), LookupReply::Found(text.to_string()))
    }

    #[test]
    fn starts_idle_and_ready() {
        let shell = Shell::new();
        assert_eq!(shell.phase(), Phase::Idle);
        assert_eq!(shell.status(), READY);
        assert!(!shell.can_speak());
    }

    #[test]
    fn submit_enters_busy() {
        let mut shell = Shell::new();

        let request = shell.submit("  Algorithm ").unwrap();

        assert_eq!(request.word, "Algorithm");
        assert_eq!(shell.phase(), Phase::Busy);
        assert_eq!(shell.status(), LOOKING_UP);
        assert!(!shell.can_speak());
        assert!(shell.output().is_empty());
    }

    #[test]
    fn blank_submit_is_rejected() {
        let mut shell = Shell::new();

        assert_eq!(shell.submit("   "), Err(SubmitError::EmptyWord));
        assert_eq!(shell.phase(), Phase::Idle);
        assert_eq!(shell.status(), ENTER_A_WORD);
    }

    #[test]
    fn second_submit_while_busy_is_rejected() {
        let mut shell = Shell::new();
        let first = shell.submit("one").unwrap();

        assert_eq!(shell.submit("two"), Err(SubmitError::Busy));
        assert!(shell.is_waiting_for(first.generation));
    }

    #[test]
    fn matching_outcome_renders_and_enables_speak() {
        let mut shell = Shell::new();
        let request = shell.submit("test").unwrap();

        let delivery = shell.accept(found(&request, "Word: test"));

        assert_eq!(delivery, Delivery::Rendered);
        assert_eq!(shell.phase(), Phase::Idle);
        assert_eq!(shell.output(), "Word: test");
        assert_eq!(shell.status(), READY);
        assert!(shell.can_speak());
    }

    #[test]
    fn failed_outcome_keeps_speak_disabled() {
        let mut shell = Shell::new();
        let request = shell.submit("test").unwrap();

        shell.accept(LookupOutcome::new(request, LookupReply::failed("worker panicked")));

        assert_eq!(shell.phase(), Phase::Idle);
        assert!(shell.output().contains("An error occurred"));
        assert!(!shell.can_speak());
    }

    #[test]
    fn clear_while_busy_drops_late_outcome() {
        let mut shell = Shell::new();
        let request = shell.submit("test").unwrap();

        shell.clear();
        assert_eq!(shell.phase(), Phase::Idle);

        assert_eq!(shell.accept(found(&request, "late")), Delivery::Stale);
        assert!(shell.output().is_empty());
        assert!(shell.input().is_empty());
    }

    #[test]
    fn outcome_of_previous_generation_does_not_finish_new_lookup() {
        let mut shell = Shell::new();
        let old = shell.submit("old").unwrap();
        shell.clear();
        let new = shell.submit("new").unwrap();

        assert_eq!(shell.accept(found(&old, "old text")), Delivery::Stale);
        assert!(shell.is_busy());

        assert_eq!(shell.accept(found(&new, "new text")), Delivery::Rendered);
        assert_eq!(shell.output(), "new text");
    }

    #[test]
    fn nothing_to_speak_when_output_blank() {
        let mut shell = Shell::new();

        assert_eq!(shell.speakable_text(), None);
        assert_eq!(shell.status(), NOTHING_TO_SPEAK);
    }

    #[test]
    fn speakable_text_is_trimmed_output() {
        let mut shell = Shell::new();
        let request = shell.submit("test").unwrap();
        shell.accept(found(&request, "Word: test\n"));

        assert_eq!(shell.speakable_text().as_deref(), Some("Word: test"));
    }
}
