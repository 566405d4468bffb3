use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when constructing a note from a raw index.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoteError {
    #[error("note index out of range: {index} (valid range is 0-11)")]
    OutOfRange { index: u8 },
}

//
// ─── NOTE CATALOG ──────────────────────────────────────────────────────────────
//

/// Display names for the twelve pitch classes, indexed chromatically from C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Returns the display label for a raw note index.
///
/// Out-of-range indices yield an empty string so callers can render
/// "no label" instead of failing.
#[must_use]
pub fn label_of(index: u8) -> &'static str {
    NOTE_NAMES.get(usize::from(index)).copied().unwrap_or("")
}

//
// ─── NOTE ──────────────────────────────────────────────────────────────────────
//

/// A pitch class in the twelve-tone chromatic scale.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Note(u8);

impl Note {
    /// Number of pitch classes in the catalog.
    pub const COUNT: u8 = 12;

    /// Creates a note from a chromatic index.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::OutOfRange` if `index` is not in `0..=11`.
    pub fn new(index: u8) -> Result<Self, NoteError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(NoteError::OutOfRange { index })
        }
    }

    /// Returns the underlying chromatic index.
    #[must_use]
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Returns the display label for this note.
    #[must_use]
    pub fn label(&self) -> &'static str {
        NOTE_NAMES[usize::from(self.0)]
    }

    /// Picks a uniformly distributed random note.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..Self::COUNT))
    }
}

impl TryFrom<u8> for Note {
    type Error = NoteError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> Self {
        note.0
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Note({})", self.label())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
