//! Chord relocation and transposition API

use wasm_bindgen::prelude::*;

use crate::api::core::with_song;
use crate::api::helpers::deserialize;
use crate::ops::{self, MutationOrigin};

/// Commit a drag-and-drop chord move.
///
/// `dest_metrics` is the destination line's cumulative character pixel
/// table, measured by the rendering layer at drop time. Invalid indices
/// are logged and leave the song unchanged. The returned song reflects
/// the relocation with anchors authoritative (no text re-derivation).
#[wasm_bindgen(js_name = moveChord)]
pub fn move_chord(
    from_line: usize,
    anchor_index: usize,
    to_line: usize,
    drop_x: f32,
    dest_metrics: JsValue,
) -> Result<JsValue, JsValue> {
    let metrics: Vec<f32> = deserialize(dest_metrics, "Failed to deserialize drop metrics")?;
    with_song(|song| {
        match ops::move_chord(song, from_line, anchor_index, to_line, drop_x, &metrics) {
            Ok(()) => ops::reconcile(song, MutationOrigin::Relocation),
            Err(e) => log::warn!("moveChord rejected: {}", e),
        }
    })
}

/// Transpose every chord in the song by `steps` semitones
#[wasm_bindgen(js_name = transposeSong)]
pub fn transpose_song(steps: i32) -> Result<JsValue, JsValue> {
    with_song(|song| {
        ops::transpose_all(song, steps);
        ops::reconcile(song, MutationOrigin::Transpose);
    })
}

/// Undo the accumulated transposition (back to the original key)
#[wasm_bindgen(js_name = resetTransposition)]
pub fn reset_transposition() -> Result<JsValue, JsValue> {
    with_song(|song| {
        ops::reset_transposition(song);
        ops::reconcile(song, MutationOrigin::Transpose);
    })
}
