use serde::{Deserialize, Serialize};

/// The quiz's current step within a question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to trigger playback of the target note.
    AwaitingPlayback,
    /// The note has been played and the answer controls are live.
    AwaitingAnswer,
    /// An answer was just scored; a scheduled advance moves the quiz on.
    ShowingFeedback,
    /// Terminal phase once a timed session runs out or the host tears down.
    Ended,
}

impl Phase {
    /// Returns true while submitted answers should be honored.
    #[must_use]
    pub fn accepts_answer(&self) -> bool {
        matches!(self, Phase::AwaitingAnswer)
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_awaiting_answer_accepts_answers() {
        assert!(Phase::AwaitingAnswer.accepts_answer());
        assert!(!Phase::AwaitingPlayback.accepts_answer());
        assert!(!Phase::ShowingFeedback.accepts_answer());
        assert!(!Phase::Ended.accepts_answer());
    }

    #[test]
    fn only_ended_is_terminal() {
        assert!(Phase::Ended.is_ended());
        assert!(!Phase::AwaitingPlayback.is_ended());
    }
}
