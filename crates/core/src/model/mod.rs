mod config;
mod note;
mod phase;
mod score;

pub use config::{AdvanceDelays, ConfigError, SessionConfig, SessionPolicy};
pub use note::{NOTE_NAMES, Note, NoteError, label_of};
pub use phase::Phase;
pub use score::ScoreTracker;
