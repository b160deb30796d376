//! Core data structures for the chord-sheet editor
//!
//! This module defines the normalized Song/Line/ChordAnchor representation.
//! Anchors are constructed complete at parse time; `char_index` is the
//! source of truth for a chord's placement, `pixel_offset` is only a
//! rendering hint recomputed from live text measurements.

use serde::{Deserialize, Serialize};

/// One chord attached to one character of a line's lyrics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordAnchor {
    /// The chord token, treated as opaque except for transposition
    /// (e.g. "Am", "F#", "Csus4", "C/E")
    pub chord: String,

    /// 0-based character offset into the line's lyrics (Unicode chars,
    /// not bytes); always clamped to the current lyric length
    pub char_index: usize,

    /// Horizontal pixel position derived from `char_index` and the
    /// current font metrics; never authoritative
    #[serde(default)]
    pub pixel_offset: f32,
}

impl ChordAnchor {
    pub fn new(chord: impl Into<String>, char_index: usize) -> Self {
        Self {
            chord: chord.into(),
            char_index,
            pixel_offset: 0.0,
        }
    }
}

/// One row of the song: lyrics plus the chords anchored above them
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Line {
    /// Denormalized space-joined view of `chord_anchors`, kept in sync
    /// on every structural change (serialization format, not a second
    /// source of truth)
    pub chords: String,

    /// Lyric text (may be empty)
    pub lyrics: String,

    /// Ordered by ascending `char_index`, stable on ties
    pub chord_anchors: Vec<ChordAnchor>,

    /// Section-header flag; forces chord display even when the global
    /// "show chords" toggle is off
    #[serde(default)]
    pub is_structure: bool,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line from lyrics plus chord tokens, distributing anchors
    /// evenly across the lyric length (token `i` of `n` lands at
    /// `floor(i * len / n)`, clamped).
    pub fn with_chords(chords: Vec<String>, lyrics: impl Into<String>, is_structure: bool) -> Self {
        let lyrics = lyrics.into();
        let len = lyrics.chars().count();
        let n = chords.len();
        let chord_anchors: Vec<ChordAnchor> = chords
            .iter()
            .enumerate()
            .map(|(i, chord)| ChordAnchor::new(chord.clone(), distribute_index(i, n, len)))
            .collect();
        let mut line = Self {
            chords: String::new(),
            lyrics,
            chord_anchors,
            is_structure,
        };
        line.rebuild_chords_cache();
        line
    }

    /// Number of Unicode chars in the lyrics
    pub fn lyric_len(&self) -> usize {
        self.lyrics.chars().count()
    }

    /// Highest valid `char_index` for this line (0 for empty lyrics,
    /// which anchor against a synthetic empty position)
    pub fn max_char_index(&self) -> usize {
        self.lyric_len().saturating_sub(1)
    }

    /// Clamp every anchor into the valid range for the current lyrics.
    /// Shrinking edits clamp rather than drop (anchors survive).
    pub fn clamp_anchors(&mut self) {
        let max = self.max_char_index();
        for anchor in &mut self.chord_anchors {
            if anchor.char_index > max {
                anchor.char_index = max;
            }
        }
    }

    /// Re-establish ascending `char_index` order (stable on ties)
    pub fn sort_anchors(&mut self) {
        self.chord_anchors.sort_by_key(|a| a.char_index);
    }

    /// Regenerate the cached `chords` string from the anchor list
    pub fn rebuild_chords_cache(&mut self) {
        self.chords = self
            .chord_anchors
            .iter()
            .map(|a| a.chord.as_str())
            .collect::<Vec<_>>()
            .join(" ");
    }

    /// The chord tokens currently present in the cached string
    pub fn chord_tokens(&self) -> Vec<&str> {
        self.chords.split_whitespace().collect()
    }
}

/// Composition-level metadata (title/description shown above the sheet)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SongMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// The whole sheet: an ordered sequence of lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Song {
    #[serde(default)]
    pub metadata: SongMetadata,

    pub lines: Vec<Line>,

    /// Running semitone offset applied so far (shown next to the
    /// transpose buttons; reset = transpose by its negation)
    #[serde(default)]
    pub transposition: i32,
}

impl Song {
    /// Create a new empty song
    pub fn new() -> Self {
        Self::default()
    }

    /// The default sheet shown on first load, before anything was persisted
    pub fn demo() -> Self {
        let lines = vec![
            Line::with_chords(
                vec!["Am".into(), "C".into(), "F".into(), "G".into()],
                "За мене хрест поніс,",
                false,
            ),
            Line::with_chords(vec!["C".into()], "І прийняв смерть,", false),
            Line::with_chords(
                vec!["F".into(), "Gsus".into(), "G".into()],
                "щоб я жив у свободі",
                false,
            ),
            Line::with_chords(vec!["C".into(), "G".into()], "Тобі віддам життя,", false),
            Line::with_chords(vec!["C".into()], "Прославлю я", false),
            Line::with_chords(
                vec!["F".into(), "Gsus".into(), "G".into()],
                "Твою милість навіки, Бог!",
                false,
            ),
        ];
        Self {
            metadata: SongMetadata::default(),
            lines,
            transposition: 0,
        }
    }

    /// Total anchor count across all lines (conserved by chord moves)
    pub fn anchor_count(&self) -> usize {
        self.lines.iter().map(|l| l.chord_anchors.len()).sum()
    }
}

/// Even-distribution rule shared by the parser and chord-field edits:
/// token `i` of `n` anchors at `floor(i * len / n)`, clamped to the last
/// character (index 0 for empty lyrics).
pub fn distribute_index(i: usize, n: usize, lyric_len: usize) -> usize {
    if lyric_len == 0 || n == 0 {
        return 0;
    }
    (i * lyric_len / n).min(lyric_len - 1)
}
