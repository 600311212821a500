//! The song aggregate: ordered chord lines plus descriptive metadata

use super::collection::IdList;
use super::errors::{ModelError, SongError};
use super::id::Id;
use super::line::ChordLine;
use super::persisted::PersistedSong;
use crate::theory::Note;
use crate::transposition::transpose_song;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SongMetadata {
    pub title: String,
    pub composed_by: String,
    pub performed_by: String,
    pub as_heard_from: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    lines: IdList<ChordLine>,
    pub metadata: SongMetadata,
}

impl Song {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<ChordLine>, metadata: SongMetadata) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            metadata,
        }
    }

    /// One chord-free line per line of `text`, as when pasting a lyric sheet
    pub fn from_lyrics(text: &str) -> Self {
        Self::from_lines(lines_from_text(text), SongMetadata::default())
    }

    pub fn lines(&self) -> &IdList<ChordLine> {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> std::slice::IterMut<'_, ChordLine> {
        self.lines.iter_mut()
    }

    pub fn line(&self, line_id: Id) -> Result<&ChordLine, ModelError> {
        self.lines.get(line_id)
    }

    pub fn line_mut(&mut self, line_id: Id) -> Result<&mut ChordLine, ModelError> {
        self.lines.get_mut(line_id)
    }

    /// Full lyric text, one line per chord line
    pub fn lyrics(&self) -> String {
        self.lines
            .iter()
            .map(ChordLine::lyrics)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn push_line(&mut self, line: ChordLine) -> Result<(), ModelError> {
        self.lines.push(line)
    }

    pub fn insert_lines_after(
        &mut self,
        anchor: Id,
        lines: Vec<ChordLine>,
    ) -> Result<(), ModelError> {
        self.lines.insert_after(anchor, lines)
    }

    pub fn insert_lines_at_beginning(&mut self, lines: Vec<ChordLine>) -> Result<(), ModelError> {
        self.lines.insert_at_beginning(lines)
    }

    pub fn remove_line(&mut self, line_id: Id) -> Result<ChordLine, ModelError> {
        self.lines.remove(line_id)
    }

    pub fn remove_lines(&mut self, line_ids: &[Id]) -> Result<Vec<ChordLine>, ModelError> {
        self.lines.remove_many(line_ids)
    }

    /// Reorder: move a line so it ends up at `index`
    pub fn move_line(&mut self, line_id: Id, index: usize) -> Result<(), ModelError> {
        self.lines.move_to(line_id, index)
    }

    pub fn replace_line(
        &mut self,
        line_id: Id,
        transform: impl FnOnce(&ChordLine) -> ChordLine,
    ) -> Result<(), ModelError> {
        self.lines.replace(line_id, transform)
    }

    /// Run `edit` against one line in place
    pub fn update_line<R>(
        &mut self,
        line_id: Id,
        edit: impl FnOnce(&mut ChordLine) -> R,
    ) -> Result<R, ModelError> {
        Ok(edit(self.lines.get_mut(line_id)?))
    }

    /// Rewrite every line; each rewritten line must keep its id
    pub fn update_lines(
        &mut self,
        transform: impl FnMut(usize, &ChordLine) -> ChordLine,
    ) -> Result<(), ModelError> {
        self.lines.update_all(transform)
    }

    /// Move every chord from the key of `from` to the key of `to`
    pub fn transpose(&mut self, from: Note, to: Note) -> Result<(), SongError> {
        transpose_song(self, from, to)?;
        Ok(())
    }

    /// Persisted JSON form (no ids)
    pub fn serialize(&self) -> Result<String, SongError> {
        serde_json::to_string(&PersistedSong::from(self))
            .map_err(|e| SongError::Serialization(e.to_string()))
    }

    /// Validate persisted JSON and rebuild the song with fresh ids
    pub fn deserialize(json: &str) -> Result<Song, SongError> {
        let persisted: PersistedSong = serde_json::from_str(json).map_err(|e| {
            log::warn!("Rejected song data: {}", e);
            SongError::Validation(e.to_string())
        })?;
        Ok(Song::from(persisted))
    }

    /// Same lines (by content) and metadata, ignoring ids
    pub fn content_equals(&self, other: &Song) -> bool {
        self.metadata == other.metadata
            && self.lines.len() == other.lines.len()
            && self
                .lines
                .iter()
                .zip(other.lines.iter())
                .all(|(a, b)| a.content_equals(b))
    }
}

/// Split pasted text into chord-free lines
pub fn lines_from_text(text: &str) -> Vec<ChordLine> {
    text.lines().map(ChordLine::from_lyrics).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChordBlock, Identified};

    fn line_texts(song: &Song) -> Vec<String> {
        song.lines().iter().map(ChordLine::lyrics).collect()
    }

    fn line_id(song: &Song, index: usize) -> Id {
        song.lines().get_at(index).unwrap().id()
    }

    #[test]
    fn test_from_lyrics() {
        let song = Song::from_lyrics("first line\nsecond line\n\nfourth");
        assert_eq!(line_texts(&song), vec!["first line", "second line", "", "fourth"]);
        assert_eq!(song.lyrics(), "first line\nsecond line\n\nfourth");
    }

    #[test]
    fn test_from_lyrics_empty() {
        assert!(Song::from_lyrics("").lines().is_empty());
    }

    #[test]
    fn test_insert_and_remove_lines() {
        let mut song = Song::from_lyrics("a\nd");
        let a = line_id(&song, 0);

        song.insert_lines_after(a, lines_from_text("b\nc")).unwrap();
        assert_eq!(line_texts(&song), vec!["a", "b", "c", "d"]);

        song.insert_lines_at_beginning(lines_from_text("start")).unwrap();
        assert_eq!(line_texts(&song), vec!["start", "a", "b", "c", "d"]);

        let b = line_id(&song, 2);
        let c = line_id(&song, 3);
        song.remove_lines(&[b, c]).unwrap();
        assert_eq!(line_texts(&song), vec!["start", "a", "d"]);

        assert!(song.remove_line(b).is_err());
    }

    #[test]
    fn test_move_line() {
        let mut song = Song::from_lyrics("a\nb\nc");
        let c = line_id(&song, 2);
        song.move_line(c, 0).unwrap();
        assert_eq!(line_texts(&song), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_edit_line_in_place() {
        let mut song = Song::from_lyrics("hello world");
        let id = line_id(&song, 0);
        let block = song.line(id).unwrap().blocks().first().unwrap().id();

        song.update_line(id, |line| line.anchor_chord(block, 2, "G"))
            .unwrap()
            .unwrap();

        let blocks = song.line(id).unwrap().blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks.last().unwrap().chord, "G");
    }

    #[test]
    fn test_replace_line() {
        let mut song = Song::from_lyrics("old");
        let id = line_id(&song, 0);
        song.replace_line(id, |line| {
            let mut line = line.clone();
            line.replace_lyrics("new");
            line
        })
        .unwrap();
        assert_eq!(line_texts(&song), vec!["new"]);
    }

    #[test]
    fn test_update_lines_with_index() {
        let mut song = Song::from_lyrics("a\nb");
        song.update_lines(|index, line| {
            line.clone().with_label(format!("Line {}", index + 1))
        })
        .unwrap();
        let labels: Vec<_> = song
            .lines()
            .iter()
            .map(|l| l.label.clone().unwrap())
            .collect();
        assert_eq!(labels, vec!["Line 1", "Line 2"]);
    }

    #[test]
    fn test_update_lines_cannot_duplicate_ids() {
        let mut song = Song::from_lyrics("a\nb\nc");
        let a = line_id(&song, 0);
        let first = song.line(a).unwrap().clone();

        assert!(matches!(
            song.update_lines(|_, _| first.clone()),
            Err(ModelError::IdChanged { .. })
        ));
        assert_eq!(line_texts(&song), vec!["a", "b", "c"]);

        song.remove_line(a).unwrap();
        assert_eq!(song.lines().len(), 2);
        assert!(song.line(a).is_err());
    }

    #[test]
    fn test_transpose_song() {
        let mut song = Song::from_lines(
            vec![ChordLine::from_blocks(vec![
                ChordBlock::new("C", "Some"),
                ChordBlock::new("", "where "),
                ChordBlock::new("Am/E", "over"),
            ])],
            SongMetadata::default(),
        );

        song.transpose(Note::C, Note::Eb).unwrap();

        let chords: Vec<_> = song
            .lines()
            .first()
            .unwrap()
            .blocks()
            .iter()
            .map(|b| b.chord.clone())
            .collect();
        assert_eq!(chords, vec!["Eb", "", "Cm/G"]);
        assert_eq!(song.lyrics(), "Somewhere over");
    }
}
