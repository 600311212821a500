//! Pitch-class and scale-degree arithmetic
//!
//! Both distances wrap around: semitones modulo 12, letter-name degrees
//! modulo 7. Construction always goes through a true (Euclidean) modulo so
//! a stored value is never negative.

use super::errors::TheoryError;
use serde::Serialize;
use std::fmt;

pub const SEMITONES_PER_OCTAVE: i32 = 12;
pub const DEGREES_PER_OCTAVE: i32 = 7;

/// Position in the chromatic scale, 0-11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Semitone(u8);

/// Letter-name distance between two notes, 0-6 (0 = unison, 1 = second, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Degree(u8);

impl Semitone {
    pub fn new(value: i32) -> Self {
        Semitone(value.rem_euclid(SEMITONES_PER_OCTAVE) as u8)
    }

    /// Reduce a floating point distance, rejecting fractional input
    pub fn try_from_f64(value: f64) -> Result<Self, TheoryError> {
        whole_number(value).map(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Degree {
    pub fn new(value: i32) -> Self {
        Degree(value.rem_euclid(DEGREES_PER_OCTAVE) as u8)
    }

    pub fn try_from_f64(value: f64) -> Result<Self, TheoryError> {
        whole_number(value).map(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Reduce any integer to its pitch class
pub fn as_semitone(value: i32) -> Semitone {
    Semitone::new(value)
}

/// Reduce any integer to its scale degree
pub fn as_degree(value: i32) -> Degree {
    Degree::new(value)
}

fn whole_number(value: f64) -> Result<i32, TheoryError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(TheoryError::NotWholeNumber(value));
    }
    // Reduce in floating point first so huge inputs can't overflow the cast
    Ok(value.rem_euclid(f64::from(SEMITONES_PER_OCTAVE * DEGREES_PER_OCTAVE)) as i32)
}

impl fmt::Display for Semitone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
