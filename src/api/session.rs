//! The editor session: the one song currently open in the UI
//!
//! Every JS-facing call goes through a `SongSession`. Ids arrive as strings
//! and keys as note spellings, exactly as the UI sends them; the session
//! parses them, applies the edit and hands back a fresh view.

use super::types::{LineView, SongView};
use crate::models::{lines_from_text, ChordLine, Id, ModelError, Song, SongError, SongMetadata};
use crate::theory::{Note, TheoryError};
use log::LevelFilter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Song(#[from] SongError),

    #[error(transparent)]
    Theory(#[from] TheoryError),

    #[error("Unknown log level: '{0}'")]
    InvalidLogLevel(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Default)]
pub struct SongSession {
    song: Song,
}

impl SongSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn view(&self) -> SongView {
        SongView::from(&self.song)
    }

    pub fn new_song(&mut self) -> SongView {
        self.song = Song::new();
        log::info!("Started a new song");
        self.view()
    }

    /// Replace the open song with persisted JSON
    ///
    /// Invalid input leaves the current song open.
    pub fn load_song(&mut self, json: &str) -> SessionResult<SongView> {
        self.song = Song::deserialize(json)?;
        log::info!(
            "Loaded song '{}' with {} lines",
            self.song.metadata.title,
            self.song.lines().len()
        );
        Ok(self.view())
    }

    pub fn song_from_lyrics(&mut self, text: &str) -> SongView {
        self.song = Song::from_lyrics(text);
        log::info!("Created song from {} lines of lyrics", self.song.lines().len());
        self.view()
    }

    pub fn serialize(&self) -> SessionResult<String> {
        Ok(self.song.serialize()?)
    }

    pub fn set_metadata(&mut self, metadata: SongMetadata) -> SongView {
        self.song.metadata = metadata;
        self.view()
    }

    pub fn set_chord(
        &mut self,
        line_id: &str,
        block_id: &str,
        chord: &str,
    ) -> SessionResult<LineView> {
        let block_id: Id = block_id.parse()?;
        self.edit_line(line_id, |line| line.set_chord(block_id, chord))
    }

    pub fn anchor_chord(
        &mut self,
        line_id: &str,
        block_id: &str,
        token_index: usize,
        chord: &str,
    ) -> SessionResult<LineView> {
        let block_id: Id = block_id.parse()?;
        self.edit_line(line_id, |line| line.anchor_chord(block_id, token_index, chord))
    }

    pub fn split_block(
        &mut self,
        line_id: &str,
        block_id: &str,
        split_index: usize,
    ) -> SessionResult<LineView> {
        let block_id: Id = block_id.parse()?;
        self.edit_line(line_id, |line| line.split_block(block_id, split_index).map(|_| ()))
    }

    pub fn replace_lyrics(&mut self, line_id: &str, text: &str) -> SessionResult<LineView> {
        self.edit_line(line_id, |line| {
            line.replace_lyrics(text);
            Ok(())
        })
    }

    /// Insert the lines of `text` after the anchor line
    ///
    /// Empty text inserts a single empty line.
    pub fn insert_lines_after(
        &mut self,
        anchor_line_id: &str,
        text: &str,
    ) -> SessionResult<SongView> {
        let anchor: Id = anchor_line_id.parse()?;
        self.song.insert_lines_after(anchor, new_lines(text))?;
        Ok(self.view())
    }

    pub fn insert_lines_at_beginning(&mut self, text: &str) -> SessionResult<SongView> {
        self.song.insert_lines_at_beginning(new_lines(text))?;
        Ok(self.view())
    }

    pub fn remove_lines(&mut self, line_ids: &[String]) -> SessionResult<SongView> {
        let ids = line_ids
            .iter()
            .map(|id| id.parse::<Id>())
            .collect::<Result<Vec<_>, _>>()?;
        let removed = self.song.remove_lines(&ids)?;
        log::debug!("Removed {} lines", removed.len());
        Ok(self.view())
    }

    pub fn move_line(&mut self, line_id: &str, index: usize) -> SessionResult<SongView> {
        self.song.move_line(line_id.parse()?, index)?;
        Ok(self.view())
    }

    pub fn transpose(&mut self, from_key: &str, to_key: &str) -> SessionResult<SongView> {
        let from: Note = from_key.parse()?;
        let to: Note = to_key.parse()?;
        self.song.transpose(from, to)?;
        Ok(self.view())
    }

    fn edit_line(
        &mut self,
        line_id: &str,
        edit: impl FnOnce(&mut ChordLine) -> Result<(), ModelError>,
    ) -> SessionResult<LineView> {
        let line_id: Id = line_id.parse()?;
        let line = self.song.line_mut(line_id)?;
        edit(&mut *line)?;
        Ok(LineView::from(&*line))
    }
}

fn new_lines(text: &str) -> Vec<ChordLine> {
    if text.is_empty() {
        vec![ChordLine::new()]
    } else {
        lines_from_text(text)
    }
}

/// Parse a level name such as `warn` or `off`, case-insensitively
pub fn parse_log_level(level: &str) -> SessionResult<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| SessionError::InvalidLogLevel(level.to_string()))
}
