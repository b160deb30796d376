//! Song storage and document-level API
//!
//! The WASM module owns the canonical song behind a mutex; JS holds only
//! rendered views. Every call locks, mutates, and returns the updated
//! song. All handlers run on the single JS thread, so the lock is only
//! ever contended by re-entrancy bugs, never by parallelism.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::models::Song;
use crate::ops::{self, MutationOrigin};
use crate::parse::{parse_bulk, serialize_song};

lazy_static! {
    /// WASM-owned song (canonical source of truth)
    static ref SONG: Mutex<Option<Song>> = Mutex::new(None);
}

/// Run a closure against the loaded song and hand back the updated song
/// as a JS value. Errors if nothing was loaded yet.
pub(crate) fn with_song<F>(f: F) -> Result<JsValue, JsValue>
where
    F: FnOnce(&mut Song),
{
    let mut guard = SONG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let song = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("no song loaded"))?;
    f(song);
    serialize(song, "Failed to serialize song")
}

/// Read-only variant of [`with_song`] for derived views
pub(crate) fn read_song<T, F>(f: F) -> Result<T, JsValue>
where
    F: FnOnce(&Song) -> Result<T, JsValue>,
{
    let guard = SONG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let song = guard
        .as_ref()
        .ok_or_else(|| JsValue::from_str("no song loaded"))?;
    f(song)
}

/// Initialize the song from persisted text, or fall back to the built-in
/// demo sheet when nothing was stored. Returns the loaded song.
#[wasm_bindgen(js_name = loadSong)]
pub fn load_song(persisted_text: Option<String>) -> Result<JsValue, JsValue> {
    let song = match persisted_text {
        Some(text) if !text.trim().is_empty() => {
            log::info!("loading song from persisted text ({} bytes)", text.len());
            Song {
                lines: parse_bulk(&text),
                ..Song::default()
            }
        }
        _ => {
            log::info!("no persisted text, loading demo song");
            Song::demo()
        }
    };
    let view = serialize(&song, "Failed to serialize song")?;
    let mut guard = SONG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(song);
    Ok(view)
}

/// Current song as a JS object
#[wasm_bindgen(js_name = getSong)]
pub fn get_song() -> Result<JsValue, JsValue> {
    with_song(|_| {})
}

/// Current song in the bracket-grammar text form (what the persistence
/// collaborator should store)
#[wasm_bindgen(js_name = serializeSongText)]
pub fn serialize_song_text() -> Result<String, JsValue> {
    read_song(|song| Ok(serialize_song(song)))
}

/// Replace the whole song from edited bulk text. An echo of our own
/// serialization is detected and skipped so it cannot clobber anchors a
/// drag just set.
#[wasm_bindgen(js_name = replaceSongText)]
pub fn replace_song_text(text: &str) -> Result<JsValue, JsValue> {
    with_song(|song| {
        ops::replace_from_text(song, text);
        ops::reconcile(song, MutationOrigin::TextEdit);
    })
}

/// Update the title/description shown above the sheet
#[wasm_bindgen(js_name = setSongMetadata)]
pub fn set_song_metadata(title: &str, description: &str) -> Result<JsValue, JsValue> {
    with_song(|song| {
        song.metadata.title = title.to_string();
        song.metadata.description = description.to_string();
    })
}

/// Fully laid-out line/anchor data as pretty JSON, for the export
/// collaborator (the image exporter renders from this view)
#[wasm_bindgen(js_name = exportSongJson)]
pub fn export_song_json() -> Result<String, JsValue> {
    read_song(|song| {
        serde_json::to_string_pretty(song).map_err(|e| {
            let msg = format!("Failed to export song as JSON: {}", e);
            log::error!("{}", msg);
            JsValue::from_str(&msg)
        })
    })
}

/// Baseline presentation settings for the settings panel
#[wasm_bindgen(js_name = defaultDisplaySettings)]
pub fn default_display_settings() -> Result<JsValue, JsValue> {
    serialize(
        &crate::models::DisplaySettings::default(),
        "Failed to serialize display settings",
    )
}
