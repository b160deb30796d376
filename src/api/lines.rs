//! Line-level editing API
//!
//! Field edits from the per-line editor. Structurally invalid indices
//! are logged and leave the song unchanged (the caller still gets the
//! current song back, never an exception).

use wasm_bindgen::prelude::*;

use crate::api::core::with_song;
use crate::ops;

/// Replace a line's lyric text (anchors clamp to the new length)
#[wasm_bindgen(js_name = setLineLyrics)]
pub fn set_line_lyrics(index: usize, lyrics: &str) -> Result<JsValue, JsValue> {
    with_song(|song| {
        if let Err(e) = ops::set_lyrics(song, index, lyrics) {
            log::warn!("setLineLyrics rejected: {}", e);
        }
    })
}

/// Replace a line's chords string (anchors re-derived, evenly spread)
#[wasm_bindgen(js_name = setLineChords)]
pub fn set_line_chords(index: usize, chords: &str) -> Result<JsValue, JsValue> {
    with_song(|song| {
        if let Err(e) = ops::set_chords(song, index, chords) {
            log::warn!("setLineChords rejected: {}", e);
        }
    })
}

/// Toggle a line's section-header flag
#[wasm_bindgen(js_name = setLineStructure)]
pub fn set_line_structure(index: usize, is_structure: bool) -> Result<JsValue, JsValue> {
    with_song(|song| {
        if let Err(e) = ops::set_structure(song, index, is_structure) {
            log::warn!("setLineStructure rejected: {}", e);
        }
    })
}

/// Append an empty line at the end of the song
#[wasm_bindgen(js_name = addLine)]
pub fn add_line() -> Result<JsValue, JsValue> {
    with_song(ops::add_line)
}

/// Insert an empty line after `index` (Enter in the line editor)
#[wasm_bindgen(js_name = insertLineAfter)]
pub fn insert_line_after(index: usize) -> Result<JsValue, JsValue> {
    with_song(|song| {
        if let Err(e) = ops::insert_line_after(song, index) {
            log::warn!("insertLineAfter rejected: {}", e);
        }
    })
}

/// Delete a line
#[wasm_bindgen(js_name = removeLine)]
pub fn remove_line(index: usize) -> Result<JsValue, JsValue> {
    with_song(|song| {
        if let Err(e) = ops::remove_line(song, index) {
            log::warn!("removeLine rejected: {}", e);
        }
    })
}

/// Prefix every lyric with one tab (anchors follow their characters)
#[wasm_bindgen(js_name = indentLyrics)]
pub fn indent_lyrics() -> Result<JsValue, JsValue> {
    with_song(ops::indent_lyrics)
}

/// Strip one leading tab from every lyric that has one
#[wasm_bindgen(js_name = unindentLyrics)]
pub fn unindent_lyrics() -> Result<JsValue, JsValue> {
    with_song(ops::unindent_lyrics)
}
