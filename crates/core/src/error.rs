use thiserror::Error;

use crate::model::{ConfigError, NoteError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
