//! Scale-degree-qualified intervals
//!
//! An interval is a degree number 1-7 with an optional accidental prefix,
//! written the way a chord chart reads it: `3` is a major third, `b3` a
//! minor third, `#4` an augmented fourth. The accidental only shifts the
//! semitone value; it never changes the degree.
//!
//! Two spellings are restricted: `###` exists only on 4, and `bbb` does not
//! exist on 1 or 4.

use super::distance::{as_degree, as_semitone, Degree, Semitone, SEMITONES_PER_OCTAVE};
use super::errors::TheoryError;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// Semitone value of each natural interval, indexed by degree (0 = unison)
const NATURAL_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    TripleFlat,
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
    TripleSharp,
}

impl Accidental {
    pub const ALL: [Accidental; 7] = [
        Accidental::TripleFlat,
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
        Accidental::TripleSharp,
    ];

    /// Semitones away from the natural interval
    pub fn offset(self) -> i32 {
        match self {
            Accidental::TripleFlat => -3,
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::TripleSharp => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::TripleFlat => "bbb",
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::TripleSharp => "###",
        }
    }

    fn from_offset(offset: i32) -> Option<Accidental> {
        Self::ALL.iter().copied().find(|acc| acc.offset() == offset)
    }

    fn from_symbol(symbol: &str) -> Option<Accidental> {
        Self::ALL.iter().copied().find(|acc| acc.symbol() == symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    accidental: Accidental,
    /// Interval number, 1-7
    number: u8,
}

static ALL_INTERVALS: Lazy<Vec<Interval>> = Lazy::new(|| {
    (1..=7u8)
        .flat_map(|number| {
            Accidental::ALL
                .into_iter()
                .filter(move |&accidental| Interval::is_spellable(accidental, number))
                .map(move |accidental| Interval { accidental, number })
        })
        .collect()
});

impl Interval {
    pub fn new(accidental: Accidental, number: u8) -> Result<Self, TheoryError> {
        if !(1..=7).contains(&number) || !Self::is_spellable(accidental, number) {
            return Err(TheoryError::InvalidInterval(format!(
                "{}{}",
                accidental.symbol(),
                number
            )));
        }
        Ok(Interval { accidental, number })
    }

    fn is_spellable(accidental: Accidental, number: u8) -> bool {
        match accidental {
            Accidental::TripleSharp => number == 4,
            Accidental::TripleFlat => number != 1 && number != 4,
            _ => true,
        }
    }

    /// The unaltered (major or perfect) interval at `degree`
    pub fn natural(degree: Degree) -> Self {
        Interval {
            accidental: Accidental::Natural,
            number: degree.value() + 1,
        }
    }

    /// Every spellable interval: 7 numbers with 5 accidentals each, one `###4`
    /// and five `bbb` spellings
    pub fn all() -> &'static [Interval] {
        &ALL_INTERVALS
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn degree(&self) -> Degree {
        as_degree(i32::from(self.number) - 1)
    }

    pub fn semitones(&self) -> Semitone {
        as_semitone(self.natural_semitones() + self.accidental.offset())
    }

    fn natural_semitones(&self) -> i32 {
        NATURAL_SEMITONES[self.degree().value() as usize]
    }
}

/// Find the interval spanning `semitones` whose letter distance is `degree`
///
/// The offset from the natural interval is taken on the short side of the
/// circle, so `find_interval(0, 6)` (C up to B#) is `#7`, not a 7 lowered
/// eleven times.
pub fn find_interval(semitones: Semitone, degree: Degree) -> Result<Interval, TheoryError> {
    let natural = Interval::natural(degree);
    let offset = i32::from(semitones.value()) - natural.natural_semitones();
    let mut delta = i32::from(as_semitone(offset).value());
    if delta > SEMITONES_PER_OCTAVE / 2 {
        delta -= SEMITONES_PER_OCTAVE;
    }

    Accidental::from_offset(delta)
        .filter(|&accidental| Interval::is_spellable(accidental, natural.number))
        .map(|accidental| Interval {
            accidental,
            number: natural.number,
        })
        .ok_or(TheoryError::UnmappedInterval {
            semitones: semitones.value(),
            degree: degree.value(),
        })
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.accidental.symbol(), self.number)
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidInterval(s.to_string());
        let split = s.len().checked_sub(1).filter(|&i| s.is_char_boundary(i)).ok_or_else(invalid)?;
        let (symbol, digit) = s.split_at(split);
        let number = digit.parse::<u8>().map_err(|_| invalid())?;
        let accidental = Accidental::from_symbol(symbol).ok_or_else(invalid)?;
        Interval::new(accidental, number).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(s: &str) -> Interval {
        s.parse().unwrap()
    }

    #[test]
    fn test_natural_semitones() {
        let values: Vec<u8> = (1..=7)
            .map(|n| interval(&n.to_string()).semitones().value())
            .collect();
        assert_eq!(values, vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_accidentals_shift_semitones() {
        assert_eq!(interval("b3").semitones().value(), 3);
        assert_eq!(interval("#4").semitones().value(), 6);
        assert_eq!(interval("##5").semitones().value(), 9);
        assert_eq!(interval("###4").semitones().value(), 8);
        assert_eq!(interval("bb7").semitones().value(), 9);
        assert_eq!(interval("bbb3").semitones().value(), 1);
        assert_eq!(interval("b1").semitones().value(), 11);
    }

    #[test]
    fn test_accidentals_keep_degree() {
        assert_eq!(interval("b3").degree().value(), 2);
        assert_eq!(interval("##3").degree().value(), 2);
        assert_eq!(interval("bbb7").degree().value(), 6);
    }

    #[test]
    fn test_restricted_spellings() {
        assert!("###4".parse::<Interval>().is_ok());
        assert!("###5".parse::<Interval>().is_err());
        assert!("bbb1".parse::<Interval>().is_err());
        assert!("bbb4".parse::<Interval>().is_err());
        assert!("bbb5".parse::<Interval>().is_ok());
        assert!("8".parse::<Interval>().is_err());
        assert!("x3".parse::<Interval>().is_err());
        assert!("".parse::<Interval>().is_err());
    }

    #[test]
    fn test_all_intervals() {
        assert_eq!(Interval::all().len(), 41);
        for interval in Interval::all() {
            assert_eq!(interval.to_string().parse::<Interval>().unwrap(), *interval);
        }
    }

    #[test]
    fn test_find_interval_inverts_semitones() {
        for interval in Interval::all() {
            let found = find_interval(interval.semitones(), interval.degree()).unwrap();
            assert_eq!(found, *interval, "{}", interval);
        }
    }

    #[test]
    fn test_find_interval_wraps_short_way() {
        assert_eq!(find_interval(as_semitone(0), as_degree(6)).unwrap().to_string(), "#7");
        assert_eq!(find_interval(as_semitone(11), as_degree(0)).unwrap().to_string(), "b1");
        assert_eq!(find_interval(as_semitone(8), as_degree(3)).unwrap().to_string(), "###4");
    }

    #[test]
    fn test_find_interval_unmapped() {
        // A tritone away from the unison has no spelling
        assert_eq!(
            find_interval(as_semitone(6), as_degree(0)),
            Err(TheoryError::UnmappedInterval { semitones: 6, degree: 0 })
        );
        // Triple flat is not available on the fourth
        assert!(find_interval(as_semitone(2), as_degree(3)).is_err());
        // Triple sharp is only available on the fourth
        assert!(find_interval(as_semitone(10), as_degree(4)).is_err());
    }
}
