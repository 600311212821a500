//! Song editing API
//!
//! Each function locks the session, applies one UI gesture and returns the
//! updated view (a line view for edits within a line, otherwise the whole
//! song).

use super::helpers::{deserialize, js_error, serialize, session};
use super::types::LineView;
use crate::models::SongMetadata;
use crate::{wasm_info, wasm_log};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = newSong)]
pub fn new_song() -> Result<JsValue, JsValue> {
    wasm_info!("newSong called");
    let view = session()?.new_song();
    serialize(&view, "Song serialization error")
}

/// Load persisted song JSON, replacing the open song
#[wasm_bindgen(js_name = loadSong)]
pub fn load_song(json: &str) -> Result<JsValue, JsValue> {
    wasm_info!("loadSong: {} bytes", json.len());
    let view = session()?
        .load_song(json)
        .map_err(|e| js_error("Failed to load song", e))?;
    serialize(&view, "Song serialization error")
}

#[wasm_bindgen(js_name = songFromLyrics)]
pub fn song_from_lyrics(text: &str) -> Result<JsValue, JsValue> {
    wasm_info!("songFromLyrics: {} bytes", text.len());
    let view = session()?.song_from_lyrics(text);
    serialize(&view, "Song serialization error")
}

/// Persisted JSON of the open song, for saving
#[wasm_bindgen(js_name = serializeSong)]
pub fn serialize_song() -> Result<String, JsValue> {
    session()?
        .serialize()
        .map_err(|e| js_error("Failed to serialize song", e))
}

#[wasm_bindgen(js_name = getSong)]
pub fn get_song() -> Result<JsValue, JsValue> {
    let view = session()?.view();
    serialize(&view, "Song serialization error")
}

#[wasm_bindgen(js_name = setMetadata)]
pub fn set_metadata(metadata_js: JsValue) -> Result<JsValue, JsValue> {
    let metadata: SongMetadata = deserialize(metadata_js, "Invalid metadata")?;
    wasm_info!("setMetadata: title={:?}", metadata.title);
    let view = session()?.set_metadata(metadata);
    serialize(&view, "Song serialization error")
}

#[wasm_bindgen(js_name = setChord)]
pub fn set_chord(line_id: &str, block_id: &str, chord: &str) -> Result<JsValue, JsValue> {
    wasm_log!("setChord: line={} block={} chord={:?}", line_id, block_id, chord);
    line_result(
        session()?.set_chord(line_id, block_id, chord),
        "Failed to set chord",
    )
}

/// Put a chord over the clicked token of a block
#[wasm_bindgen(js_name = anchorChord)]
pub fn anchor_chord(
    line_id: &str,
    block_id: &str,
    token_index: usize,
    chord: &str,
) -> Result<JsValue, JsValue> {
    wasm_log!(
        "anchorChord: line={} block={} token={} chord={:?}",
        line_id,
        block_id,
        token_index,
        chord
    );
    line_result(
        session()?.anchor_chord(line_id, block_id, token_index, chord),
        "Failed to anchor chord",
    )
}

#[wasm_bindgen(js_name = splitBlock)]
pub fn split_block(line_id: &str, block_id: &str, split_index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("splitBlock: line={} block={} at={}", line_id, block_id, split_index);
    line_result(
        session()?.split_block(line_id, block_id, split_index),
        "Failed to split block",
    )
}

/// Replace a line's text; chords on the line are dropped if the text changed
#[wasm_bindgen(js_name = replaceLyrics)]
pub fn replace_lyrics(line_id: &str, text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("replaceLyrics: line={} text={:?}", line_id, text);
    line_result(
        session()?.replace_lyrics(line_id, text),
        "Failed to replace lyrics",
    )
}

#[wasm_bindgen(js_name = insertLinesAfter)]
pub fn insert_lines_after(anchor_line_id: &str, text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertLinesAfter: anchor={}", anchor_line_id);
    let view = session()?
        .insert_lines_after(anchor_line_id, text)
        .map_err(|e| js_error("Failed to insert lines", e))?;
    serialize(&view, "Song serialization error")
}

#[wasm_bindgen(js_name = insertLinesAtBeginning)]
pub fn insert_lines_at_beginning(text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertLinesAtBeginning");
    let view = session()?
        .insert_lines_at_beginning(text)
        .map_err(|e| js_error("Failed to insert lines", e))?;
    serialize(&view, "Song serialization error")
}

/// Remove lines by id; nothing is removed if any id is unknown
#[wasm_bindgen(js_name = removeLines)]
pub fn remove_lines(line_ids_js: JsValue) -> Result<JsValue, JsValue> {
    let line_ids: Vec<String> = deserialize(line_ids_js, "Invalid line id list")?;
    wasm_log!("removeLines: {} ids", line_ids.len());
    let view = session()?
        .remove_lines(&line_ids)
        .map_err(|e| js_error("Failed to remove lines", e))?;
    serialize(&view, "Song serialization error")
}

#[wasm_bindgen(js_name = moveLine)]
pub fn move_line(line_id: &str, index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("moveLine: line={} to={}", line_id, index);
    let view = session()?
        .move_line(line_id, index)
        .map_err(|e| js_error("Failed to move line", e))?;
    serialize(&view, "Song serialization error")
}

#[wasm_bindgen(js_name = transposeSong)]
pub fn transpose_song(from_key: &str, to_key: &str) -> Result<JsValue, JsValue> {
    wasm_info!("transposeSong: {} -> {}", from_key, to_key);
    let view = session()?
        .transpose(from_key, to_key)
        .map_err(|e| js_error("Failed to transpose song", e))?;
    serialize(&view, "Song serialization error")
}

fn line_result<E: std::fmt::Display>(
    result: Result<LineView, E>,
    context: &str,
) -> Result<JsValue, JsValue> {
    let view = result.map_err(|e| js_error(context, e))?;
    serialize(&view, "Line serialization error")
}
