//! Shared error types for the quiz crate.

use thiserror::Error;

use pitch_core::ConfigError;

/// Errors emitted when constructing a `QuizSession`.
///
/// Expected gameplay conditions (inactive session, wrong phase) are not
/// errors; they surface as ignored outcomes instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
