//! Note <-> interval lookup tables
//!
//! Format:
//!   (root, interval) → target note
//!   (root, target)   → interval
//!
//! Example:
//!   (C, "b3")   → Eb     (minor third above C)
//!   (E, "3")    → G#     (major third above E)
//!   (C#, "3")   → E#     (letter name wins over the simpler F)
//!   (D, F#)     → "3"
//!
//! Both tables cover the full 21-note domain and are built once, on first
//! use. Nothing writes to them afterwards.

use super::interval::{find_interval, Interval};
use super::errors::TheoryError;
use super::note::Note;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static INTERVAL_TO_NOTE: Lazy<HashMap<(Note, Interval), Note>> = Lazy::new(build_interval_to_note);

static NOTE_TO_INTERVAL: Lazy<HashMap<(Note, Note), Interval>> = Lazy::new(build_note_to_interval);

/// Note reached by applying `interval` upward from `root`
pub fn interval_to_note(root: Note, interval: Interval) -> Note {
    INTERVAL_TO_NOTE
        .get(&(root, interval))
        .copied()
        .unwrap_or_else(|| spell_interval(root, interval))
}

/// Interval from `root` up to `target`
pub fn note_to_interval(root: Note, target: Note) -> Result<Interval, TheoryError> {
    match NOTE_TO_INTERVAL.get(&(root, target)) {
        Some(interval) => Ok(*interval),
        None => measure_interval(root, target),
    }
}

/// Build the forward table for every root and every spellable interval
fn build_interval_to_note() -> HashMap<(Note, Interval), Note> {
    let mut table = HashMap::new();

    for &root in Note::ALL.iter() {
        for &interval in Interval::all() {
            table.insert((root, interval), spell_interval(root, interval));
        }
    }

    table
}

/// Build the inverse table for every ordered pair of notes
fn build_note_to_interval() -> HashMap<(Note, Note), Interval> {
    let mut table = HashMap::new();

    for &root in Note::ALL.iter() {
        for &target in Note::ALL.iter() {
            match measure_interval(root, target) {
                Ok(interval) => {
                    table.insert((root, target), interval);
                }
                Err(e) => log::error!(
                    "Interval table has no entry for {} -> {}: {}",
                    root,
                    target,
                    e
                ),
            }
        }
    }

    table
}

/// Pick the spelling `interval` above `root` that carries the expected letter
///
/// Falls back to the first enharmonic candidate when no spelling has that
/// letter (B# up a major third lands on E, since D## is not one of the 21
/// spellings).
fn spell_interval(root: Note, interval: Interval) -> Note {
    let candidates = root.semitones_up(i32::from(interval.semitones().value()));
    let letter = root.note_name_from(interval.degree());

    candidates
        .iter()
        .copied()
        .find(|note| note.name() == letter)
        .unwrap_or(candidates[0])
}

fn measure_interval(root: Note, target: Note) -> Result<Interval, TheoryError> {
    find_interval(root.semitones_between(target), root.degrees_between(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(s: &str) -> Interval {
        s.parse().unwrap()
    }

    #[test]
    fn test_c_major_scale() {
        let scale: Vec<&str> = ["1", "2", "3", "4", "5", "6", "7"]
            .iter()
            .map(|i| interval_to_note(Note::C, interval(i)).as_str())
            .collect();
        assert_eq!(scale, vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_c_sharp_major_uses_theoretical_spellings() {
        let scale: Vec<&str> = ["1", "2", "3", "4", "5", "6", "7"]
            .iter()
            .map(|i| interval_to_note(Note::Cs, interval(i)).as_str())
            .collect();
        assert_eq!(scale, vec!["C#", "D#", "E#", "F#", "G#", "A#", "B#"]);
    }

    #[test]
    fn test_flat_intervals() {
        assert_eq!(interval_to_note(Note::C, interval("b3")), Note::Eb);
        assert_eq!(interval_to_note(Note::F, interval("4")), Note::Bb);
        assert_eq!(interval_to_note(Note::D, interval("b7")), Note::C);
        assert_eq!(interval_to_note(Note::E, interval("b2")), Note::F);
    }

    #[test]
    fn test_fallback_to_first_candidate() {
        // D## is not spellable, so the major third of B# falls back to E
        assert_eq!(interval_to_note(Note::Bs, interval("3")), Note::E);
        assert_eq!(interval_to_note(Note::Eb, interval("b3")), Note::Gb);
        // Cbb would be the diminished third of Ab; the first candidate is A#
        assert_eq!(interval_to_note(Note::Ab, interval("bb3")), Note::As);
    }

    #[test]
    fn test_note_to_interval() {
        assert_eq!(note_to_interval(Note::C, Note::Cs).unwrap().to_string(), "#1");
        assert_eq!(note_to_interval(Note::C, Note::A).unwrap().to_string(), "6");
        assert_eq!(note_to_interval(Note::D, Note::Fs).unwrap().to_string(), "3");
        assert_eq!(note_to_interval(Note::D, Note::F).unwrap().to_string(), "b3");
        assert_eq!(note_to_interval(Note::C, Note::Bs).unwrap().to_string(), "#7");
        assert_eq!(note_to_interval(Note::Fb, Note::Bs).unwrap().to_string(), "###4");
        assert_eq!(note_to_interval(Note::Bs, Note::Cb).unwrap().to_string(), "bbb2");
    }

    #[test]
    fn test_inverse_table_is_total() {
        for root in Note::ALL {
            for target in Note::ALL {
                assert!(note_to_interval(root, target).is_ok(), "{} -> {}", root, target);
            }
        }
    }

    #[test]
    fn test_semitone_closure() {
        for root in Note::ALL {
            for &interval in Interval::all() {
                let target = interval_to_note(root, interval);
                assert_eq!(
                    root.semitones_between(target),
                    interval.semitones(),
                    "{} + {} = {}",
                    root,
                    interval,
                    target
                );
            }
        }
    }

    #[test]
    fn test_tables_are_stable() {
        let first = interval_to_note(Note::Gb, interval("5"));
        let second = interval_to_note(Note::Gb, interval("5"));
        assert_eq!(first, second);
        assert_eq!(first, Note::Db);
    }
}
