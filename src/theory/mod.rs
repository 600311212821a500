//! Music theory foundation
//!
//! Pitch classes, scale degrees, the 21 note spellings, intervals, and the
//! precomputed tables that convert between them. Everything here is pure.

pub mod distance;
pub mod errors;
pub mod interval;
pub mod note;
pub mod tables;

pub use distance::{as_degree, as_semitone, Degree, Semitone};
pub use errors::TheoryError;
pub use interval::{find_interval, Accidental, Interval};
pub use note::{Note, NoteName, CHROMATIC_SCALE};
pub use tables::{interval_to_note, note_to_interval};
