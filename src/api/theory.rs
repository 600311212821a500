//! Stateless helpers: chord transposition, tokenizing and settings

use super::helpers::js_error;
use super::session::parse_log_level;
use crate::text::tokenize;
use crate::theory::Note;
use crate::transposition;
use crate::{wasm_info, wasm_warn};
use wasm_bindgen::prelude::*;

/// Transpose one chord symbol between two keys
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, from_key: &str, to_key: &str) -> Result<String, JsValue> {
    let from: Note = from_key.parse().map_err(|e| js_error("Invalid key", e))?;
    let to: Note = to_key.parse().map_err(|e| js_error("Invalid key", e))?;
    transposition::transpose_chord(chord, from, to)
        .map_err(|e| js_error("Failed to transpose chord", e))
}

#[wasm_bindgen(js_name = tokenizeLyrics)]
pub fn tokenize_lyrics(text: &str) -> js_sys::Array {
    tokenize(text).into_iter().map(JsValue::from_str).collect()
}

/// The 21 note spellings, for key pickers
#[wasm_bindgen(js_name = listNotes)]
pub fn list_notes() -> js_sys::Array {
    Note::ALL
        .iter()
        .map(|note| JsValue::from_str(note.as_str()))
        .collect()
}

#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_log_level(level).map_err(|e| {
        wasm_warn!("{}", e);
        JsValue::from_str(&e.to_string())
    })?;
    log::set_max_level(filter);
    wasm_info!("Log level set to {}", filter);
    Ok(())
}
