//! Capability traits for host-provided collaborators.
//!
//! The quiz core produces its effects only through these seams. Every
//! collaborator is optional on the session: a missing one is logged and the
//! effect is skipped, so gameplay continues without sound or display.

use pitch_core::Note;

/// Plays the audio clip for a pitch class.
pub trait NotePlayer {
    fn play(&self, note: Note);
    fn stop(&self);
}

/// Enables or disables the answer controls as a group.
pub trait ButtonPanel {
    fn set_interactable(&self, interactable: bool);
}

/// Receives user-facing feedback and score text.
pub trait FeedbackSink {
    fn show_message(&self, text: &str);
    fn show_score(&self, text: &str);
}
