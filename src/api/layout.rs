//! Layout API: pixel recomputation, drop resolution, column views

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::core::{read_song, with_song};
use crate::api::helpers::{deserialize, serialize};
use crate::layout;
use crate::models::Line;
use crate::ops;

/// The two display columns, as cloned line views for rendering
#[derive(Serialize)]
pub struct ColumnView {
    pub left: Vec<Line>,
    pub right: Vec<Line>,
}

/// Push a fresh character measurement for one line and recompute its
/// anchor pixel offsets. `metrics` may be null before the first layout
/// pass; anchors then get uniform fallback spacing.
#[wasm_bindgen(js_name = recomputeLinePixels)]
pub fn recompute_line_pixels(index: usize, metrics: JsValue) -> Result<JsValue, JsValue> {
    let metrics: Option<Vec<f32>> = deserialize(metrics, "Failed to deserialize char metrics")?;
    with_song(|song| {
        if let Err(e) = ops::apply_line_metrics(song, index, metrics.as_deref()) {
            log::warn!("recomputeLinePixels rejected: {}", e);
        }
    })
}

/// Resolve a drop x coordinate to the nearest character index of the
/// measured table (pure; used for hover feedback during a drag)
#[wasm_bindgen(js_name = resolveDropPosition)]
pub fn resolve_drop_position(metrics: JsValue, drop_x: f32) -> Result<usize, JsValue> {
    let metrics: Vec<f32> = deserialize(metrics, "Failed to deserialize char metrics")?;
    Ok(layout::resolve_drop(&metrics, drop_x))
}

/// Partition the song into two display columns. `split_index` is the
/// user-chosen last line of the left column, or null for the automatic
/// midpoint split.
#[wasm_bindgen(js_name = splitColumns)]
pub fn split_columns(split_index: Option<usize>) -> Result<JsValue, JsValue> {
    read_song(|song| {
        let (left, right) = layout::split_columns(&song.lines, split_index);
        let view = ColumnView {
            left: left.to_vec(),
            right: right.to_vec(),
        };
        serialize(&view, "Failed to serialize column view")
    })
}
