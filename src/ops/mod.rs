//! Song mutations
//!
//! Every edit the UI can make routes through here: chord relocation,
//! whole-song transposition, per-line field edits, bulk replacement.
//! Operations are total over their valid domain; invalid structural
//! indices are rejected with an [`OpError`] that the API layer logs and
//! turns into a silent no-op (the song is left untouched).

use thiserror::Error;

use crate::layout::{recompute_pixels, resolve_drop};
use crate::models::{Line, Song};
use crate::parse::parse_bulk;
use crate::transpose::transpose_chord;

/// Rejection reasons for structurally invalid edits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    #[error("line index {index} out of range (song has {len} lines)")]
    LineIndexOutOfRange { index: usize, len: usize },

    #[error("anchor index {index} out of range (line has {len} anchors)")]
    AnchorIndexOutOfRange { index: usize, len: usize },
}

/// Who originated a mutation. Reconciliation re-derives anchors from the
/// chords string only for text edits; a relocation or transposition has
/// already written authoritative anchors, so only the cached string is
/// rebuilt. This replaces the original's wall-clock guard flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOrigin {
    TextEdit,
    Relocation,
    Transpose,
}

/// Move one chord between (or within) lines.
///
/// The drop's x coordinate is resolved against the destination line's
/// current character pixel table (nearest neighbor, lowest index on
/// ties), the anchor is removed from the source by index and inserted at
/// the destination in a single pass, both cached chord strings are
/// regenerated, and the destination is re-sorted by `char_index`.
/// Same-line moves are valid; total anchor count is conserved.
pub fn move_chord(
    song: &mut Song,
    from_line: usize,
    anchor_index: usize,
    to_line: usize,
    drop_x: f32,
    dest_metrics: &[f32],
) -> Result<(), OpError> {
    let len = song.lines.len();
    if from_line >= len {
        return Err(OpError::LineIndexOutOfRange { index: from_line, len });
    }
    if to_line >= len {
        return Err(OpError::LineIndexOutOfRange { index: to_line, len });
    }
    let anchors = song.lines[from_line].chord_anchors.len();
    if anchor_index >= anchors {
        return Err(OpError::AnchorIndexOutOfRange {
            index: anchor_index,
            len: anchors,
        });
    }

    // Remove by index, not by token: chords may repeat within a line
    let mut moved = song.lines[from_line].chord_anchors.remove(anchor_index);
    song.lines[from_line].rebuild_chords_cache();

    let dest = &mut song.lines[to_line];
    let resolved = resolve_drop(dest_metrics, drop_x);
    moved.char_index = resolved.min(dest.max_char_index());
    moved.pixel_offset = dest_metrics.get(resolved).copied().unwrap_or(0.0);

    dest.chord_anchors.push(moved);
    dest.sort_anchors();
    dest.rebuild_chords_cache();

    log::debug!(
        "moved chord from line {} anchor {} to line {} char {}",
        from_line,
        anchor_index,
        to_line,
        resolved
    );
    Ok(())
}

/// Transpose every chord in the song by `steps` semitones and bump the
/// running transposition counter. Anchors stay where they are; only the
/// tokens and the cached strings change.
pub fn transpose_all(song: &mut Song, steps: i32) {
    for line in &mut song.lines {
        for anchor in &mut line.chord_anchors {
            anchor.chord = transpose_chord(&anchor.chord, steps);
        }
        line.rebuild_chords_cache();
    }
    song.transposition += steps;
}

/// Undo the accumulated transposition (back to the original key)
pub fn reset_transposition(song: &mut Song) {
    let back = -song.transposition;
    if back != 0 {
        transpose_all(song, back);
    }
}

/// Replace a line's lyrics. Existing anchors are clamped into the new
/// length, never dropped.
pub fn set_lyrics(song: &mut Song, index: usize, lyrics: &str) -> Result<(), OpError> {
    let line = line_mut(song, index)?;
    line.lyrics = lyrics.to_string();
    line.clamp_anchors();
    Ok(())
}

/// Replace a line's chords string. Anchors are re-derived complete, by
/// the same even distribution the parser uses.
pub fn set_chords(song: &mut Song, index: usize, chords: &str) -> Result<(), OpError> {
    let line = line_mut(song, index)?;
    let tokens: Vec<String> = chords.split_whitespace().map(str::to_string).collect();
    *line = Line::with_chords(tokens, line.lyrics.clone(), line.is_structure);
    Ok(())
}

/// Toggle the section-header flag
pub fn set_structure(song: &mut Song, index: usize, is_structure: bool) -> Result<(), OpError> {
    line_mut(song, index)?.is_structure = is_structure;
    Ok(())
}

/// Append an empty line at the end
pub fn add_line(song: &mut Song) {
    song.lines.push(Line::new());
}

/// Insert an empty line after `index` (Enter in the line editor)
pub fn insert_line_after(song: &mut Song, index: usize) -> Result<(), OpError> {
    let len = song.lines.len();
    if index >= len {
        return Err(OpError::LineIndexOutOfRange { index, len });
    }
    song.lines.insert(index + 1, Line::new());
    Ok(())
}

/// Delete a line outright (its anchors go with it; this is the one edit
/// that is allowed to change the total anchor count)
pub fn remove_line(song: &mut Song, index: usize) -> Result<(), OpError> {
    let len = song.lines.len();
    if index >= len {
        return Err(OpError::LineIndexOutOfRange { index, len });
    }
    song.lines.remove(index);
    Ok(())
}

/// Prefix every lyric with one tab, shifting anchors so each chord stays
/// over the same character
pub fn indent_lyrics(song: &mut Song) {
    for line in &mut song.lines {
        line.lyrics.insert(0, '\t');
        for anchor in &mut line.chord_anchors {
            anchor.char_index += 1;
        }
        line.clamp_anchors();
    }
}

/// Strip one leading tab where present, shifting anchors back
pub fn unindent_lyrics(song: &mut Song) {
    for line in &mut song.lines {
        if let Some(rest) = line.lyrics.strip_prefix('\t') {
            line.lyrics = rest.to_string();
            for anchor in &mut line.chord_anchors {
                anchor.char_index = anchor.char_index.saturating_sub(1);
            }
            line.clamp_anchors();
        }
    }
}

/// Replace the whole song from pasted text (the bulk-input auto-apply
/// path). Skipped when the parsed `(chords, lyrics)` pairs already match
/// the current lines, so a serialize→reparse echo of our own mutation
/// cannot clobber anchors a drag just set.
pub fn replace_from_text(song: &mut Song, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let parsed = parse_bulk(text);
    if lines_equivalent(&song.lines, &parsed) {
        return;
    }
    song.lines = parsed;
}

fn lines_equivalent(a: &[Line], b: &[Line]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.chords == y.chords && x.lyrics == y.lyrics)
}

/// Re-establish the line invariants after a mutation, honoring the
/// origin's authority over anchors (see [`MutationOrigin`]).
pub fn reconcile(song: &mut Song, origin: MutationOrigin) {
    for line in &mut song.lines {
        match origin {
            MutationOrigin::TextEdit => {
                // Text is authoritative: rebuild anchors when the token
                // list diverged from the cached string, else just clamp
                let tokens: Vec<String> =
                    line.chords.split_whitespace().map(str::to_string).collect();
                let anchored: Vec<&str> =
                    line.chord_anchors.iter().map(|a| a.chord.as_str()).collect();
                if tokens.iter().map(String::as_str).ne(anchored.into_iter()) {
                    *line = Line::with_chords(tokens, line.lyrics.clone(), line.is_structure);
                } else {
                    line.clamp_anchors();
                }
            }
            MutationOrigin::Relocation | MutationOrigin::Transpose => {
                // Anchors are authoritative: only the cache follows
                line.sort_anchors();
                line.rebuild_chords_cache();
                line.clamp_anchors();
            }
        }
    }
}

/// Recompute pixel offsets for one line from a fresh measurement
pub fn apply_line_metrics(
    song: &mut Song,
    index: usize,
    metrics: Option<&[f32]>,
) -> Result<(), OpError> {
    let line = line_mut(song, index)?;
    recompute_pixels(line, metrics);
    Ok(())
}

fn line_mut(song: &mut Song, index: usize) -> Result<&mut Line, OpError> {
    let len = song.lines.len();
    song.lines
        .get_mut(index)
        .ok_or(OpError::LineIndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        Song {
            lines: parse_bulk("[Am C F G] За мене хрест поніс,\n[C] І прийняв смерть,"),
            ..Song::default()
        }
    }

    // Uniform 10px-per-char table for a lyric of `n` chars
    fn metrics(n: usize) -> Vec<f32> {
        (0..=n).map(|i| i as f32 * 10.0).collect()
    }

    #[test]
    fn test_move_chord_between_lines() {
        let mut s = song();
        let before = s.anchor_count();
        let dest_len = s.lines[1].lyric_len();
        move_chord(&mut s, 0, 1, 1, 52.0, &metrics(dest_len)).unwrap();

        assert_eq!(s.anchor_count(), before);
        assert_eq!(s.lines[0].chords, "Am F G");
        // resolved to char 5, sorted after the existing C at 0
        assert_eq!(s.lines[1].chords, "C C");
        assert_eq!(s.lines[1].chord_anchors[1].char_index, 5);
        assert_eq!(s.lines[1].chord_anchors[1].pixel_offset, 50.0);
    }

    #[test]
    fn test_move_chord_within_same_line() {
        let mut s = song();
        let before = s.anchor_count();
        let len = s.lines[0].lyric_len();
        // drag the Am from char 0 toward the end of its own line
        move_chord(&mut s, 0, 0, 0, 170.0, &metrics(len)).unwrap();

        assert_eq!(s.anchor_count(), before);
        assert_eq!(s.lines[0].chords, "C F G Am");
        let last = s.lines[0].chord_anchors.last().unwrap();
        assert_eq!(last.chord, "Am");
        assert_eq!(last.char_index, 17);
    }

    #[test]
    fn test_move_chord_invalid_indices_no_op() {
        let mut s = song();
        let snapshot = s.clone();

        assert!(move_chord(&mut s, 9, 0, 1, 0.0, &[]).is_err());
        assert!(move_chord(&mut s, 0, 9, 1, 0.0, &[]).is_err());
        assert!(move_chord(&mut s, 0, 0, 9, 0.0, &[]).is_err());
        assert_eq!(s, snapshot);
    }

    #[test]
    fn test_move_chord_resolved_index_clamped_to_lyrics() {
        let mut s = song();
        // metrics table longer than the destination lyrics: the table's
        // end boundary resolves, then clamps to the last character
        let dest_len = s.lines[1].lyric_len();
        move_chord(&mut s, 0, 3, 1, 1e6, &metrics(dest_len)).unwrap();
        let last = s.lines[1].chord_anchors.last().unwrap();
        assert_eq!(last.char_index, dest_len - 1);
    }

    #[test]
    fn test_move_chord_empty_metrics_degrades() {
        let mut s = song();
        move_chord(&mut s, 0, 0, 1, 33.0, &[]).unwrap();
        let last = s.lines[1].chord_anchors.last().unwrap();
        assert_eq!(last.char_index, 0);
        assert_eq!(last.pixel_offset, 0.0);
    }

    #[test]
    fn test_anchor_count_conserved_over_move_sequence() {
        let mut s = song();
        let before = s.anchor_count();
        let m0 = metrics(s.lines[0].lyric_len());
        let m1 = metrics(s.lines[1].lyric_len());
        move_chord(&mut s, 0, 0, 1, 40.0, &m1).unwrap();
        move_chord(&mut s, 1, 0, 0, 90.0, &m0).unwrap();
        move_chord(&mut s, 0, 2, 0, 10.0, &m0).unwrap();
        assert_eq!(s.anchor_count(), before);
    }

    #[test]
    fn test_transpose_all_updates_anchors_and_cache() {
        let mut s = song();
        transpose_all(&mut s, 2);
        assert_eq!(s.lines[0].chords, "Bm D G A");
        assert_eq!(s.lines[1].chords, "D");
        assert_eq!(s.transposition, 2);

        transpose_all(&mut s, -2);
        assert_eq!(s.lines[0].chords, "Am C F G");
        assert_eq!(s.transposition, 0);
    }

    #[test]
    fn test_reset_transposition() {
        let mut s = song();
        transpose_all(&mut s, 5);
        reset_transposition(&mut s);
        assert_eq!(s.lines[0].chords, "Am C F G");
        assert_eq!(s.transposition, 0);
    }

    #[test]
    fn test_set_lyrics_clamps_anchors() {
        let mut s = song();
        set_lyrics(&mut s, 0, "коротко").unwrap();
        assert!(s.lines[0]
            .chord_anchors
            .iter()
            .all(|a| a.char_index <= 6));
        assert_eq!(s.lines[0].chord_anchors.len(), 4);
    }

    #[test]
    fn test_set_chords_rederives_anchors() {
        let mut s = song();
        set_chords(&mut s, 1, "F Gsus G").unwrap();
        assert_eq!(s.lines[1].chords, "F Gsus G");
        let indices: Vec<usize> = s.lines[1]
            .chord_anchors
            .iter()
            .map(|a| a.char_index)
            .collect();
        // 3 chords over a 17-char lyric
        assert_eq!(indices, vec![0, 5, 11]);
    }

    #[test]
    fn test_line_insertion_and_removal() {
        let mut s = song();
        insert_line_after(&mut s, 0).unwrap();
        assert_eq!(s.lines.len(), 3);
        assert_eq!(s.lines[1].lyrics, "");

        remove_line(&mut s, 1).unwrap();
        assert_eq!(s.lines.len(), 2);

        assert!(insert_line_after(&mut s, 5).is_err());
        assert!(remove_line(&mut s, 5).is_err());
    }

    #[test]
    fn test_indent_shifts_anchors_with_text() {
        let mut s = song();
        let before: Vec<usize> = s.lines[0]
            .chord_anchors
            .iter()
            .map(|a| a.char_index)
            .collect();
        indent_lyrics(&mut s);
        assert!(s.lines[0].lyrics.starts_with('\t'));
        let after: Vec<usize> = s.lines[0]
            .chord_anchors
            .iter()
            .map(|a| a.char_index)
            .collect();
        assert_eq!(after, before.iter().map(|i| i + 1).collect::<Vec<_>>());

        unindent_lyrics(&mut s);
        let back: Vec<usize> = s.lines[0]
            .chord_anchors
            .iter()
            .map(|a| a.char_index)
            .collect();
        assert_eq!(back, before);
    }

    #[test]
    fn test_replace_from_text_skips_echo() {
        let mut s = song();
        // pretend a drag re-anchored a chord somewhere unusual
        s.lines[0].chord_anchors[1].char_index = 19;
        let echo = crate::parse::serialize_song(&s);
        replace_from_text(&mut s, &echo);
        // same (chords, lyrics) pairs: the reparse is skipped and the
        // drag's anchor survives
        assert_eq!(s.lines[0].chord_anchors[1].char_index, 19);

        replace_from_text(&mut s, "[D] інший текст");
        assert_eq!(s.lines.len(), 1);
        assert_eq!(s.lines[0].chords, "D");
    }

    #[test]
    fn test_replace_from_text_ignores_blank() {
        let mut s = song();
        replace_from_text(&mut s, "   \n ");
        assert_eq!(s.lines.len(), 2);
    }

    #[test]
    fn test_reconcile_text_edit_rebuilds_on_divergence() {
        let mut s = song();
        s.lines[1].chords = "F G".to_string();
        reconcile(&mut s, MutationOrigin::TextEdit);
        assert_eq!(s.lines[1].chord_anchors.len(), 2);
        assert_eq!(s.lines[1].chord_anchors[0].chord, "F");
    }

    #[test]
    fn test_reconcile_relocation_keeps_anchors() {
        let mut s = song();
        s.lines[0].chord_anchors[0].char_index = 10;
        reconcile(&mut s, MutationOrigin::Relocation);
        // anchors won, the cache follows the (re-sorted) anchors
        assert_eq!(s.lines[0].chords, "C Am F G");
    }
}
