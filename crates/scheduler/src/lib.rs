//! Clock-driven playback scheduler: selects the segment whose time range covers the current
//! playback time and issues show/clear commands against a [`TitleSink`].
//!
//! The scheduler itself never touches a timer: [`Scheduler::tick`] is a synchronous function of
//! the caller-supplied wall-clock time and (in `external` mode) the external [`TimeSource`], so
//! production code and tests drive it identically.

mod sink;
mod time_source;

pub use segmenter::Segment;
pub use sink::{RecordingSink, SinkCall, TitleSink};
pub use time_source::{FixedTimeSource, TimeSource};
use tracing::debug;

/// How long a segment is allowed to remain on-screen after playback passes its end, before a gap
/// to the next segment forces a clear.
pub const HOLD_WINDOW_S: f64 = 2.0;

/// Which clock drives the scheduler's notion of "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Playback time comes from an external timecode feed, read via a [`TimeSource`] each tick.
    External,
    /// Playback time is derived from a local monotonic wall clock and a fixed origin.
    Autonomous,
}

/// The scheduler's mutable state.
#[derive(Debug)]
pub struct Scheduler {
    segments: Vec<Segment>,
    last_shown_index: Option<usize>,
    mode: Mode,
    autonomous_origin_vtt_s: f64,
    autonomous_origin_wall_ms: u64,
}

impl Scheduler {
    pub fn new(mode: Mode) -> Self {
        Self {
            segments: Vec::new(),
            last_shown_index: None,
            mode,
            autonomous_origin_vtt_s: 0.0,
            autonomous_origin_wall_ms: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_shown_index(&self) -> Option<usize> {
        self.last_shown_index
    }

    /// Replaces the segment sequence, resets `last_shown_index`, and optionally switches mode and
    /// autonomous origin. Does not itself dispatch any sink call.
    pub fn load(
        &mut self,
        segments: Vec<Segment>,
        mode: Option<Mode>,
        autonomous_origin_vtt_s: Option<f64>,
        autonomous_origin_wall_ms: Option<u64>,
    ) {
        self.segments = segments;
        self.last_shown_index = None;
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(origin) = autonomous_origin_vtt_s {
            self.autonomous_origin_vtt_s = origin;
        }
        if let Some(wall) = autonomous_origin_wall_ms {
            self.autonomous_origin_wall_ms = wall;
        }
    }

    /// Clears the title unconditionally, drops all segments, and resets `last_shown_index`.
    pub fn stop(&mut self, sink: &dyn TitleSink) {
        sink.clear_title();
        self.segments.clear();
        self.last_shown_index = None;
    }

    fn current_time(&self, now_ms: u64, external: &dyn TimeSource) -> Option<f64> {
        match self.mode {
            Mode::Autonomous => {
                let elapsed_s = (now_ms as f64 - self.autonomous_origin_wall_ms as f64) / 1000.0;
                Some(self.autonomous_origin_vtt_s + elapsed_s)
            }
            Mode::External => external.get_time(),
        }
    }

    /// Runs one scheduler tick. `now_ms` is the caller's wall-clock time in milliseconds, used
    /// only in `autonomous` mode; `external` is consulted only in `external` mode.
    pub fn tick(&mut self, sink: &dyn TitleSink, now_ms: u64, external: &dyn TimeSource) {
        let Some(t) = self.current_time(now_ms, external) else {
            return;
        };

        if self.segments.is_empty() {
            if self.last_shown_index.is_some() {
                sink.clear_title();
                self.last_shown_index = None;
            }
            return;
        }

        let cur = self.segments.iter().position(|s| t >= s.start_s && t < s.end_s);

        if let Some(cur) = cur {
            if Some(cur) != self.last_shown_index {
                debug!(index = cur, start_s = self.segments[cur].start_s, "showing segment");
                sink.send_title(&self.segments[cur].lines);
                self.last_shown_index = Some(cur);
            }
            return;
        }

        if self.last_shown_index.is_none() {
            return;
        }

        let gap_to_next = self.segments.iter().map(|s| s.start_s).filter(|&start| start > t).fold(None, |acc: Option<f64>, start| {
            Some(acc.map_or(start, |best| best.min(start)))
        });

        let should_clear = match gap_to_next {
            Some(gap_start) => (gap_start - t) > HOLD_WINDOW_S,
            None => true,
        };

        if should_clear {
            debug!(t, "clearing title, gap to next segment exceeds hold window");
            sink.clear_title();
            self.last_shown_index = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment { start_s: start, end_s: end, lines: vec![text.to_string()] }
    }

    fn calls(sink: &RecordingSink) -> Vec<SinkCall> {
        sink.calls.lock().unwrap().clone()
    }

    #[test]
    fn single_cue_autonomous_shows_then_clears_after_hold_window() {
        let sink = RecordingSink::default();
        let external = FixedTimeSource::default();
        let mut sched = Scheduler::new(Mode::Autonomous);
        sched.load(vec![seg(0.0, 2.0, "Hello")], None, Some(0.0), Some(0));

        sched.tick(&sink, 50, &external);
        assert_eq!(sched.last_shown_index(), Some(0));

        sched.tick(&sink, 2050, &external);
        assert_eq!(sched.last_shown_index(), None);

        assert_eq!(calls(&sink), vec![SinkCall::SendTitle(vec!["Hello".to_string()]), SinkCall::ClearTitle]);
    }

    #[test]
    fn two_cues_hold_window_keeps_title_across_small_gap() {
        let sink = RecordingSink::default();
        let external = FixedTimeSource::default();
        let mut sched = Scheduler::new(Mode::Autonomous);
        sched.load(vec![seg(0.0, 1.0, "A"), seg(1.5, 2.5, "B")], None, Some(0.0), Some(0));

        sched.tick(&sink, 500, &external);
        assert_eq!(sched.last_shown_index(), Some(0));

        sched.tick(&sink, 1100, &external);
        // gap 0.4s < 2s hold window: title stays, no new dispatch
        assert_eq!(sched.last_shown_index(), Some(0));

        sched.tick(&sink, 1550, &external);
        assert_eq!(sched.last_shown_index(), Some(1));

        sched.tick(&sink, 2550, &external);
        assert_eq!(sched.last_shown_index(), None);

        assert_eq!(
            calls(&sink),
            vec![
                SinkCall::SendTitle(vec!["A".to_string()]),
                SinkCall::SendTitle(vec!["B".to_string()]),
                SinkCall::ClearTitle,
            ]
        );
    }

    #[test]
    fn external_mode_waits_for_first_reading_then_dispatches_immediately() {
        let sink = RecordingSink::default();
        let mut sched = Scheduler::new(Mode::External);
        sched.load(vec![seg(4.0, 6.0, "live")], None, None, None);

        sched.tick(&sink, 0, &FixedTimeSource(None));
        assert!(calls(&sink).is_empty());

        sched.tick(&sink, 0, &FixedTimeSource(Some(5.0)));
        assert_eq!(sched.last_shown_index(), Some(0));
        assert_eq!(calls(&sink), vec![SinkCall::SendTitle(vec!["live".to_string()])]);
    }

    #[test]
    fn load_then_stop_dispatches_a_single_clear_even_with_nothing_shown() {
        let sink = RecordingSink::default();
        let mut sched = Scheduler::new(Mode::Autonomous);
        sched.load(vec![seg(10.0, 12.0, "later")], None, Some(0.0), Some(0));

        sched.stop(&sink);

        assert_eq!(calls(&sink), vec![SinkCall::ClearTitle]);
        assert_eq!(sched.last_shown_index(), None);
    }

    #[test]
    fn empty_segments_with_prior_title_clears_on_next_tick() {
        let sink = RecordingSink::default();
        let external = FixedTimeSource::default();
        let mut sched = Scheduler::new(Mode::Autonomous);
        sched.load(vec![seg(0.0, 100.0, "Hello")], None, Some(0.0), Some(0));
        sched.tick(&sink, 10, &external);
        assert_eq!(sched.last_shown_index(), Some(0));

        sched.load(Vec::new(), None, None, None);
        sched.tick(&sink, 20, &external);
        // load() already reset last_shown_index, so no spurious clear is expected here.
        assert_eq!(sched.last_shown_index(), None);
    }
}
