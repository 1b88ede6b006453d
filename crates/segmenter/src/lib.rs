//! Converts timed VTT cues into fixed-geometry display segments.
//!
//! A cue's text is word-wrapped to [`LINE_WIDTH`]-character lines, grouped into chunks of up to
//! [`MAX_LINES`] lines, and the cue's duration is distributed across the resulting segments
//! proportionally to each segment's character count.

mod segment;
mod wrap;

pub use segment::Segment;
use vtt::Cue;

/// Display-safe line width. Chosen over the wire row width of 40 to leave margin for the boxing
/// control codes the page encoder adds.
pub const LINE_WIDTH: usize = 38;
/// Maximum lines per segment.
pub const MAX_LINES: usize = 2;

/// Segments a single cue, distributing its duration across the resulting segments.
pub fn segment_cue(cue: &Cue) -> Vec<Segment> {
    let wrapped = wrap::wrap(&cue.text);
    if wrapped.is_empty() {
        return Vec::new();
    }

    let chunks: Vec<Vec<String>> = wrapped.chunks(MAX_LINES).map(|c| c.to_vec()).collect();

    if chunks.len() == 1 {
        return vec![Segment { start_s: cue.start_s, end_s: cue.end_s, lines: chunks.into_iter().next().unwrap() }];
    }

    let segments_raw: Vec<Segment> =
        chunks.into_iter().map(|lines| Segment { start_s: 0.0, end_s: 0.0, lines }).collect();

    let total_chars: usize = segments_raw.iter().map(Segment::char_count).sum();
    let duration = cue.duration_s();

    let count = segments_raw.len();
    let mut out = Vec::with_capacity(count);
    let mut cursor = cue.start_s;
    let last = count - 1;

    for (i, mut seg) in segments_raw.into_iter().enumerate() {
        seg.start_s = cursor;
        if i == last {
            seg.end_s = cue.end_s;
        } else {
            let share = if total_chars == 0 { 1.0 / count as f64 } else { seg.char_count() as f64 / total_chars as f64 };
            seg.end_s = cursor + duration * share;
        }
        cursor = seg.end_s;
        out.push(seg);
    }

    out
}

/// Segments every cue in `cues`, in order.
pub fn segment_cues(cues: &[Cue]) -> Vec<Segment> {
    cues.iter().flat_map(segment_cue).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start: f64, end: f64, text: &str) -> Cue {
        Cue { start_s: start, end_s: end, text: text.to_string() }
    }

    #[test]
    fn single_segment_cue_keeps_original_bounds() {
        let c = cue(1.0, 3.0, "Hello");
        let segs = segment_cue(&c);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].start_s, 1.0);
        assert_eq!(segs[0].end_s, 3.0);
    }

    #[test]
    fn every_segment_respects_line_geometry() {
        let text = "word ".repeat(40);
        let c = cue(0.0, 10.0, text.trim());
        for seg in segment_cue(&c) {
            assert!(seg.lines.len() <= MAX_LINES);
            for line in &seg.lines {
                assert!(line.chars().count() <= LINE_WIDTH);
            }
        }
    }

    #[test]
    fn last_segment_end_matches_cue_end_exactly() {
        let text = "word ".repeat(40);
        let c = cue(0.0, 7.0, text.trim());
        let segs = segment_cue(&c);
        assert!(segs.len() > 1);
        assert_eq!(segs.last().unwrap().end_s, 7.0);
    }

    #[test]
    fn segments_are_strictly_ordered_and_non_overlapping() {
        let text = "word ".repeat(40);
        let c = cue(0.0, 7.0, text.trim());
        let segs = segment_cue(&c);
        for pair in segs.windows(2) {
            assert!(pair[0].end_s <= pair[1].start_s + f64::EPSILON);
            assert!(pair[0].start_s < pair[0].end_s);
        }
    }

    #[test]
    fn empty_cue_text_yields_no_segments() {
        let c = cue(0.0, 1.0, "   ");
        assert!(segment_cue(&c).is_empty());
    }

    #[test]
    fn segment_cues_flattens_across_multiple_cues() {
        let cues = vec![cue(0.0, 1.0, "A"), cue(1.5, 2.5, "B")];
        let segs = segment_cues(&cues);
        assert_eq!(segs.len(), 2);
    }
}
