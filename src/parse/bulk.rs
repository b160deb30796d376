//! Bulk-text parser
//!
//! Converts a pasted song ( `[chords] lyrics` per line, or chords and
//! lyrics separated by a tab / two-plus spaces) into structured lines
//! with complete chord anchors. Production rules are tried in order per
//! line; the final fallback treats the whole line as lyrics, so the
//! parse as a whole never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Line;

/// `[chord cluster] lyric remainder`; the cluster must be non-empty and
/// must not span a missing `]` (malformed brackets fall through)
static BRACKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[(.+?)\]\s*(.*)$").expect("bracket regex is valid"));

/// Tab or a run of two or more spaces: the column form `chords  lyrics`
static COLUMN_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t| {2,}").expect("column split regex is valid"));

/// Parse a whole pasted text into lines. Blank lines are discarded.
pub fn parse_bulk(text: &str) -> Vec<Line> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parse one non-blank line, trying the bracket grammar first, then the
/// tab/multi-space column split, then whole-line-as-lyrics.
fn parse_line(raw: &str) -> Line {
    if let Some(caps) = BRACKET_RE.captures(raw) {
        let mut cluster = caps[1].trim();
        let mut is_structure = false;
        if let Some(rest) = cluster.strip_prefix('*') {
            is_structure = true;
            cluster = rest.trim_start();
        }
        let chords: Vec<String> = cluster.split_whitespace().map(str::to_string).collect();
        let lyrics = caps[2].trim();
        return Line::with_chords(chords, lyrics, is_structure);
    }

    let fields: Vec<&str> = COLUMN_SPLIT_RE.split(raw).collect();
    if fields.len() >= 2 {
        let chords: Vec<String> = fields[0].split_whitespace().map(str::to_string).collect();
        let lyrics = fields[1..].join(" ");
        return Line::with_chords(chords, lyrics.trim(), false);
    }

    // No recognizable chord column: the whole line is lyrics
    Line::with_chords(Vec::new(), raw.trim(), false)
}
