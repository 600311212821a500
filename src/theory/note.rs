//! Note spellings and letter names
//!
//! A note is one of the 7 letters A-G with at most one sharp or flat,
//! giving 21 spellings. Theoretical spellings such as E#, Fb, B# and Cb
//! are included because interval arithmetic produces them (the third of
//! C# major is E#).
//!
//! Each spelling belongs to exactly one pitch class; each pitch class lists
//! one or two spellings in `CHROMATIC_SCALE`.

use super::distance::{as_degree, as_semitone, Degree, Semitone};
use super::errors::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter name of a note, ignoring accidentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    pub const ALL: [NoteName; 7] = [
        NoteName::A,
        NoteName::B,
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
    ];

    fn index(self) -> i32 {
        self as i32
    }

    fn from_index(index: i32) -> NoteName {
        Self::ALL[as_degree(index).value() as usize]
    }

    /// Pitch class of the natural note with this letter
    fn natural_semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::A => 'A',
            NoteName::B => 'B',
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
        }
    }

    fn from_char(ch: char) -> Option<NoteName> {
        match ch.to_ascii_uppercase() {
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
    #[serde(rename = "B#")]
    Bs,
    Cb,
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    #[serde(rename = "E#")]
    Es,
    Fb,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
}

/// Enharmonic spellings per pitch class, indexed by semitone (0 = C)
///
/// Order inside an entry matters: the first spelling is the fallback when
/// no candidate has the expected letter name.
pub const CHROMATIC_SCALE: [&[Note]; 12] = [
    &[Note::C, Note::Bs],
    &[Note::Cs, Note::Db],
    &[Note::D],
    &[Note::Ds, Note::Eb],
    &[Note::E, Note::Fb],
    &[Note::F, Note::Es],
    &[Note::Fs, Note::Gb],
    &[Note::G],
    &[Note::Gs, Note::Ab],
    &[Note::A],
    &[Note::As, Note::Bb],
    &[Note::B, Note::Cb],
];

impl Note {
    pub const ALL: [Note; 21] = [
        Note::Ab,
        Note::A,
        Note::As,
        Note::Bb,
        Note::B,
        Note::Bs,
        Note::Cb,
        Note::C,
        Note::Cs,
        Note::Db,
        Note::D,
        Note::Ds,
        Note::Eb,
        Note::E,
        Note::Es,
        Note::Fb,
        Note::F,
        Note::Fs,
        Note::Gb,
        Note::G,
        Note::Gs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Note::Ab => "Ab",
            Note::A => "A",
            Note::As => "A#",
            Note::Bb => "Bb",
            Note::B => "B",
            Note::Bs => "B#",
            Note::Cb => "Cb",
            Note::C => "C",
            Note::Cs => "C#",
            Note::Db => "Db",
            Note::D => "D",
            Note::Ds => "D#",
            Note::Eb => "Eb",
            Note::E => "E",
            Note::Es => "E#",
            Note::Fb => "Fb",
            Note::F => "F",
            Note::Fs => "F#",
            Note::Gb => "Gb",
            Note::G => "G",
            Note::Gs => "G#",
        }
    }

    /// Letter name without the accidental
    pub fn name(&self) -> NoteName {
        match self {
            Note::Ab | Note::A | Note::As => NoteName::A,
            Note::Bb | Note::B | Note::Bs => NoteName::B,
            Note::Cb | Note::C | Note::Cs => NoteName::C,
            Note::Db | Note::D | Note::Ds => NoteName::D,
            Note::Eb | Note::E | Note::Es => NoteName::E,
            Note::Fb | Note::F | Note::Fs => NoteName::F,
            Note::Gb | Note::G | Note::Gs => NoteName::G,
        }
    }

    /// -1 for flat, 0 for natural, +1 for sharp
    fn accidental_offset(&self) -> i32 {
        match self {
            Note::Ab | Note::Bb | Note::Cb | Note::Db | Note::Eb | Note::Fb | Note::Gb => -1,
            Note::As | Note::Bs | Note::Cs | Note::Ds | Note::Es | Note::Fs | Note::Gs => 1,
            _ => 0,
        }
    }

    fn from_parts(name: NoteName, accidental: i32) -> Option<Note> {
        Note::ALL
            .iter()
            .copied()
            .find(|note| note.name() == name && note.accidental_offset() == accidental)
    }

    /// Pitch class of this spelling
    pub fn semitone(&self) -> Semitone {
        as_semitone(self.name().natural_semitone() + self.accidental_offset())
    }

    /// Spellings reachable by moving `n` semitones up the chromatic circle
    ///
    /// 3 semitones up from C yields both D# and Eb.
    pub fn semitones_up(&self, n: i32) -> &'static [Note] {
        let target = as_semitone(i32::from(self.semitone().value()) + n);
        CHROMATIC_SCALE[target.value() as usize]
    }

    /// Upward semitone distance to `other`, in [0, 11]
    pub fn semitones_between(&self, other: Note) -> Semitone {
        as_semitone(i32::from(other.semitone().value()) - i32::from(self.semitone().value()))
    }

    /// Letter distance to `other`, ignoring accidentals, in [0, 6]
    pub fn degrees_between(&self, other: Note) -> Degree {
        as_degree(other.name().index() - self.name().index())
    }

    pub fn is_enharmonic_to(&self, other: Note) -> bool {
        self.semitones_between(other).value() == 0
    }

    /// Letter reached by stepping `degree` letters forward from this note's letter
    pub fn note_name_from(&self, degree: Degree) -> NoteName {
        NoteName::from_index(self.name().index() + i32::from(degree.value()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Letter is case-insensitive; accidentals may be ASCII (#, b) or Unicode (♯, ♭)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TheoryError::UnknownNote(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let name = chars.next().and_then(NoteName::from_char).ok_or_else(unknown)?;
        let accidental = match chars.as_str() {
            "" => 0,
            "#" | "♯" => 1,
            "b" | "♭" => -1,
            _ => return Err(unknown()),
        };
        Note::from_parts(name, accidental).ok_or_else(unknown)
    }
}
