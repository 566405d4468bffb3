#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use model::{
    AdvanceDelays, ConfigError, NOTE_NAMES, Note, NoteError, Phase, ScoreTracker, SessionConfig,
    SessionPolicy, label_of,
};
pub use time::{Clock, fixed_clock, fixed_now};
