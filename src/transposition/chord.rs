//! Chord symbol transposition
//!
//! A chord symbol is a root spelling followed by a quality suffix, with an
//! optional `/bass` part. Root and bass move by the interval between the
//! two keys, re-spelled so the letter names follow the target key:
//! `C#7` from C to D is `D#7`, never `Eb7`.

use crate::models::Song;
use crate::theory::{interval_to_note, note_to_interval, Note, TheoryError};

/// Transpose a full chord symbol, bass note included
pub fn transpose_chord(chord: &str, from: Note, to: Note) -> Result<String, TheoryError> {
    match chord.split_once('/') {
        Some((base, bass)) => Ok(format!(
            "{}/{}",
            transpose_symbol(base, from, to)?,
            transpose_symbol(bass, from, to)?
        )),
        None => transpose_symbol(chord, from, to),
    }
}

/// Transpose one root-plus-suffix symbol
///
/// Symbols that don't start with a note spelling come back unchanged.
pub fn transpose_symbol(symbol: &str, from: Note, to: Note) -> Result<String, TheoryError> {
    let root = match root_of(symbol) {
        Some(root) => root,
        None => return Ok(symbol.to_string()),
    };

    let interval = note_to_interval(from, root)?;
    let new_root = interval_to_note(to, interval);
    Ok(format!("{}{}", new_root, &symbol[root.as_str().len()..]))
}

/// Longest note spelling that prefixes `symbol`
fn root_of(symbol: &str) -> Option<Note> {
    Note::ALL
        .iter()
        .copied()
        .filter(|note| symbol.starts_with(note.as_str()))
        .max_by_key(|note| note.as_str().len())
}

/// Transpose every chord in the song from key `from` to key `to`
///
/// Works on a copy and swaps it in at the end, so an error leaves the
/// song as it was.
pub fn transpose_song(song: &mut Song, from: Note, to: Note) -> Result<(), TheoryError> {
    let mut transposed = song.clone();
    let mut count = 0;

    for line in transposed.lines_mut() {
        for block in line.blocks_mut() {
            if block.chord.is_empty() {
                continue;
            }
            block.chord = transpose_chord(&block.chord, from, to)?;
            count += 1;
        }
    }

    *song = transposed;
    log::debug!("Transposed {} chords from {} to {}", count, from, to);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tc(chord: &str, from: Note, to: Note) -> String {
        transpose_chord(chord, from, to).unwrap()
    }

    #[test]
    fn test_sharp_root_keeps_letter_order() {
        assert_eq!(tc("C#7", Note::C, Note::D), "D#7");
    }

    #[test]
    fn test_slash_chord() {
        assert_eq!(tc("Am/C", Note::C, Note::D), "Bm/D");
        assert_eq!(tc("G/B", Note::G, Note::F), "F/A");
    }

    #[test]
    fn test_flat_keys() {
        assert_eq!(tc("F", Note::C, Note::Bb), "Eb");
        assert_eq!(tc("Bbmaj7", Note::F, Note::G), "Cmaj7");
    }

    #[test]
    fn test_suffix_is_kept() {
        assert_eq!(tc("Dsus4", Note::D, Note::E), "Esus4");
        assert_eq!(tc("Ebm7b5", Note::C, Note::D), "Fm7b5");
    }

    #[test]
    fn test_longest_root_wins() {
        assert_eq!(root_of("Bb7"), Some(Note::Bb));
        assert_eq!(root_of("B7"), Some(Note::B));
        assert_eq!(root_of("C#m"), Some(Note::Cs));
    }

    #[test]
    fn test_no_root_is_unchanged() {
        assert_eq!(tc("N.C.", Note::C, Note::A), "N.C.");
        assert_eq!(tc("", Note::C, Note::A), "");
        assert_eq!(tc("x/y", Note::C, Note::A), "x/y");
    }

    #[test]
    fn test_same_key_is_identity() {
        for note in Note::ALL {
            assert_eq!(tc(&format!("{}m7", note), Note::E, Note::E), format!("{}m7", note));
        }
    }
}
