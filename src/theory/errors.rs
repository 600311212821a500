//! Error types for the music theory layer
//!
//! `UnmappedInterval` indicates a bug in the interval arithmetic: every
//! (semitone, degree) pair produced by two of the 21 note spellings has a
//! spelling. The other variants reject malformed input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TheoryError {
    /// Distances are whole numbers of semitones or degrees
    #[error("Distance must be a whole number, got {0}")]
    NotWholeNumber(f64),

    /// No accidental spelling covers the requested interval
    #[error("No interval spans {semitones} semitones over degree {degree}")]
    UnmappedInterval { semitones: u8, degree: u8 },

    #[error("Invalid note: '{0}'. Expected a letter A-G with an optional # or b")]
    UnknownNote(String),

    #[error("Invalid interval: '{0}'")]
    InvalidInterval(String),
}
