//! Chord transposition
//!
//! Shifts a chord token's root note by a number of semitones while
//! passing the suffix through unchanged. Spelling follows the input:
//! flat roots stay in the flat chromatic table, everything else uses the
//! sharp table. Tokens that don't parse as chords come back untouched —
//! transposition never fails.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sharp-spelled chromatic scale
const NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-spelled chromatic scale
const FLATS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Root grammar: one natural letter, optionally a single `#` or `b`;
/// everything after is the suffix (sus4, m7, dim, ...), left alone
static CHORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([CDEFGAB][#b]?)(.*)$").expect("chord regex is valid"));

/// Transpose one chord token by `steps` semitones.
///
/// Slash chords ("C/E") split once: the main chord and the bass note are
/// transposed independently and rejoined; the bass is never split again.
///
/// ```
/// use chordsheet_wasm::transpose::transpose_chord;
///
/// assert_eq!(transpose_chord("Am", 2), "Bm");
/// assert_eq!(transpose_chord("Bb", 1), "B");
/// assert_eq!(transpose_chord("C/E", 2), "D/F#");
/// assert_eq!(transpose_chord("Приспів:", 3), "Приспів:");
/// ```
pub fn transpose_chord(chord: &str, steps: i32) -> String {
    if let Some((main, bass)) = chord.split_once('/') {
        return format!("{}/{}", transpose_token(main, steps), transpose_token(bass, steps));
    }
    transpose_token(chord, steps)
}

/// Transpose a single token with no slash handling
fn transpose_token(token: &str, steps: i32) -> String {
    let Some(caps) = CHORD_REGEX.captures(token) else {
        // Not a chord (section label, stray text): fail soft
        return token.to_string();
    };
    let root = &caps[1];
    let suffix = &caps[2];

    let table = if root.contains('b') { &FLATS } else { &NOTES };
    let Some(index) = table.iter().position(|n| *n == root) else {
        return token.to_string();
    };

    // rem_euclid keeps wraparound correct for negative steps of any size
    let new_index = (index as i32 + steps).rem_euclid(12) as usize;
    format!("{}{}", table[new_index], suffix)
}
