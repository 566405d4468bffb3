#![forbid(unsafe_code)]

pub mod capability;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod session_clock;

pub use pitch_core::Clock;

pub use capability::{ButtonPanel, FeedbackSink, NotePlayer};
pub use error::SessionError;
pub use scheduler::{ActionHandle, ActionScheduler};
pub use session::{AnswerVerdict, QuizSession};
pub use session_clock::SessionClock;
