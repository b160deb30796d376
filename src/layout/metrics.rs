//! Chord-position model: pixel offsets from character metrics
//!
//! `char_index` is authoritative; pixel offsets are recomputed from the
//! measurement collaborator's table whenever the lyrics, the font size,
//! or the anchor membership changes. Before the first layout pass no
//! table exists yet, so anchors get a synthesized uniform spacing that
//! keeps them separated and draggable; real metrics replace it wholesale.

use crate::models::Line;

/// Cumulative pixel offsets per character boundary, as measured by the
/// rendering layer: entry `i` is the width of `lyrics[..i]`, so a lyric
/// of `n` chars yields `n + 1` entries (the last one is the line end).
pub type CharMetrics = Vec<f32>;

/// Synthesized spacing per anchor index while no measurements exist
pub const FALLBACK_ANCHOR_STEP_PX: f32 = 80.0;

/// Recompute every anchor's `pixel_offset` for the current lyrics and
/// metrics. Clamps `char_index` first (a shrinking edit must not leave a
/// dangling anchor), never touches it otherwise.
pub fn recompute_pixels(line: &mut Line, metrics: Option<&[f32]>) {
    line.clamp_anchors();
    match metrics {
        Some(table) if !table.is_empty() => {
            for anchor in &mut line.chord_anchors {
                let i = anchor.char_index.min(table.len() - 1);
                anchor.pixel_offset = table[i];
            }
        }
        _ => {
            // Degraded-but-functional: uniform spacing by anchor order
            for (i, anchor) in line.chord_anchors.iter_mut().enumerate() {
                anchor.pixel_offset = i as f32 * FALLBACK_ANCHOR_STEP_PX;
            }
        }
    }
}

/// Resolve a drop's x coordinate to a character index by nearest
/// neighbor over the metrics table. Exact-center ties go to the lowest
/// index (first found). An empty table resolves to 0.
pub fn resolve_drop(metrics: &[f32], drop_x: f32) -> usize {
    let mut closest = 0;
    let mut min_distance = f32::INFINITY;
    for (i, pos) in metrics.iter().enumerate() {
        let distance = (drop_x - pos).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = i;
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with_anchors(lyrics: &str, indices: &[usize]) -> Line {
        let mut line = Line::with_chords(
            indices.iter().map(|_| "C".to_string()).collect(),
            lyrics,
            false,
        );
        for (anchor, &i) in line.chord_anchors.iter_mut().zip(indices) {
            anchor.char_index = i;
        }
        line
    }

    #[test]
    fn test_recompute_reads_metrics_table() {
        let mut line = line_with_anchors("abcd", &[0, 2]);
        let metrics = vec![0.0, 8.0, 16.0, 24.0, 32.0];
        recompute_pixels(&mut line, Some(&metrics));
        assert_eq!(line.chord_anchors[0].pixel_offset, 0.0);
        assert_eq!(line.chord_anchors[1].pixel_offset, 16.0);
    }

    #[test]
    fn test_recompute_clamps_out_of_range_anchor() {
        let mut line = line_with_anchors("abcd", &[9]);
        let metrics = vec![0.0, 8.0, 16.0, 24.0, 32.0];
        recompute_pixels(&mut line, Some(&metrics));
        assert_eq!(line.chord_anchors[0].char_index, 3);
        assert_eq!(line.chord_anchors[0].pixel_offset, 24.0);
    }

    #[test]
    fn test_fallback_spacing_without_metrics() {
        let mut line = line_with_anchors("abcd", &[0, 1, 2]);
        recompute_pixels(&mut line, None);
        let offsets: Vec<f32> = line.chord_anchors.iter().map(|a| a.pixel_offset).collect();
        assert_eq!(offsets, vec![0.0, 80.0, 160.0]);
    }

    #[test]
    fn test_real_metrics_replace_fallback() {
        let mut line = line_with_anchors("abcd", &[0, 2]);
        recompute_pixels(&mut line, None);
        let metrics = vec![0.0, 10.0, 20.0, 30.0, 40.0];
        recompute_pixels(&mut line, Some(&metrics));
        assert_eq!(line.chord_anchors[1].pixel_offset, 20.0);
    }

    #[test]
    fn test_resolve_drop_nearest_neighbor() {
        let metrics = vec![0.0, 10.0, 20.0, 30.0];
        assert_eq!(resolve_drop(&metrics, -5.0), 0);
        assert_eq!(resolve_drop(&metrics, 12.0), 1);
        assert_eq!(resolve_drop(&metrics, 26.0), 3);
        assert_eq!(resolve_drop(&metrics, 100.0), 3);
    }

    #[test]
    fn test_resolve_drop_tie_prefers_lowest_index() {
        let metrics = vec![0.0, 10.0, 20.0];
        // 5.0 is equidistant from 0.0 and 10.0
        assert_eq!(resolve_drop(&metrics, 5.0), 0);
    }

    #[test]
    fn test_resolve_drop_empty_table() {
        assert_eq!(resolve_drop(&[], 42.0), 0);
    }
}
