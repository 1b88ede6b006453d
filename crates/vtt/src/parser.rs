//! Tolerant WebVTT cue extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::cue::Cue;

static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(\d+):)?(\d{2}):(\d{2})\.(\d{3})\s*-->\s*(?:(\d+):)?(\d{2}):(\d{2})\.(\d{3})",
    )
    .expect("static timestamp pattern is valid")
});

fn parse_component(hours: Option<&str>, minutes: &str, seconds: &str, millis: &str) -> f64 {
    let hours: f64 = hours.and_then(|h| h.parse().ok()).unwrap_or(0.0);
    let minutes: f64 = minutes.parse().unwrap_or(0.0);
    let seconds: f64 = seconds.parse().unwrap_or(0.0);
    let millis: f64 = millis.parse().unwrap_or(0.0);
    hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0
}

fn parse_timestamp_line(line: &str) -> Option<(f64, f64)> {
    let caps = TIMESTAMP_LINE.captures(line)?;
    let start = parse_component(caps.get(1).map(|m| m.as_str()), &caps[2], &caps[3], &caps[4]);
    let end = parse_component(caps.get(5).map(|m| m.as_str()), &caps[6], &caps[7], &caps[8]);
    Some((start, end))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses the raw text of a `.vtt` file into an ordered list of cues.
///
/// Unrecognized lines (the `WEBVTT` header, cue identifiers, `NOTE` blocks, stray text outside a
/// cue) are skipped rather than rejected. A cue whose joined text is empty after trimming is
/// dropped. An empty or fully-unparseable input yields an empty list, which is valid.
pub fn parse_str(input: &str) -> Vec<Cue> {
    let mut cues = Vec::new();
    let mut lines = input.lines().peekable();

    while let Some(line) = lines.next() {
        let Some((start_s, end_s)) = parse_timestamp_line(line.trim()) else {
            continue;
        };

        let mut text_lines = Vec::new();
        for text_line in lines.by_ref() {
            if text_line.trim().is_empty() {
                break;
            }
            text_lines.push(text_line);
        }

        let text = collapse_whitespace(&text_lines.join(" "));
        if text.is_empty() || end_s <= start_s {
            continue;
        }

        cues.push(Cue { start_s, end_s, text });
    }

    cues
}
